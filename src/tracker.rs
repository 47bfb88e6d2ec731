use crate::gms::*;
use crate::ids::Ability;
use crate::sunit::Tag;
use ahash::AHashSet;

/// Something a rule wanted but could not pay for this tick.
#[derive(Debug, PartialEq)]
pub struct UnrealizedItem {
    pub available: Gms,
    pub ability: Ability,
}

/// Bookkeeping for a single tick, rebuilt from the snapshot every time.
#[derive(Debug, Default)]
pub struct Tracker {
    pub unrealized: Vec<UnrealizedItem>,
    pub available_gms: Gms,
    reserved: AHashSet<Tag>,
    issued: Vec<(Tag, Ability)>,
}

impl Tracker {
    pub fn reset(&mut self, available_gms: Gms) {
        self.unrealized.clear();
        self.reserved.clear();
        self.issued.clear();
        self.available_gms = available_gms;
    }

    /// Pays for `ability`, or notes it as unrealized.
    pub fn pay(&mut self, ability: Ability, price: Gms) -> bool {
        if self.available_gms.checked_sub(price) {
            return true;
        }
        self.unrealized.push(UnrealizedItem {
            available: self.available_gms,
            ability,
        });
        false
    }

    pub fn reserve_unit(&mut self, tag: Tag) {
        self.reserved.insert(tag);
    }

    pub fn is_available(&self, tag: Tag) -> bool {
        !self.reserved.contains(&tag)
    }

    pub fn record(&mut self, tag: Tag, ability: Ability) {
        self.issued.push((tag, ability));
    }

    pub fn was_issued(&self, ability: Ability) -> bool {
        self.issued.iter().any(|&(_, a)| a == ability)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gms::Price;

    #[test]
    fn failed_payment_is_unrealized() {
        let mut tracker = Tracker::default();
        tracker.reset(Gms::new(100, 0, 10));
        assert!(!tracker.pay(Ability::Train_Roach, Ability::Train_Roach.price()));
        assert_eq!(
            tracker.unrealized,
            vec![UnrealizedItem {
                available: Gms::new(100, 0, 10),
                ability: Ability::Train_Roach
            }]
        );
        assert!(tracker.pay(Ability::Train_Drone, Ability::Train_Drone.price()));
        assert_eq!(tracker.available_gms, Gms::new(50, 0, 9));
    }

    #[test]
    fn reset_releases_reservations() {
        let mut tracker = Tracker::default();
        tracker.reserve_unit(Tag(3));
        tracker.record(Tag(3), Ability::Build_Hatchery);
        assert!(!tracker.is_available(Tag(3)));
        assert!(tracker.was_issued(Ability::Build_Hatchery));
        tracker.reset(Gms::default());
        assert!(tracker.is_available(Tag(3)));
        assert!(!tracker.was_issued(Ability::Build_Hatchery));
    }
}
