use crate::*;
use glam::Vec3;
use log::info;
use ordered_float::OrderedFloat;

// Sites this close count as the same point
const SAME_SITE: f32 = 0.01;
// The army gathers between the bases until there are this many
const STAGING_TOWN_HALLS: usize = 4;
const MAX_EXPANSION_BANK: i32 = 1200;
const EXPANSION_BANK_PER_HATCHERY: i32 = 300;

impl<'a> Bot<'a> {
    /// Closest site to the start location a hatchery can be placed at, skipping the start
    /// and staging locations.
    pub fn rank_candidates(&self) -> Option<Vec3> {
        let start = self.state.start_location;
        let staging = self.state.staging_location;
        let mut sites: Vec<_> = self
            .state
            .expansions
            .all()
            .filter(|&site| {
                util::planar_distance(site, start) > SAME_SITE
                    && util::planar_distance(site, staging) > SAME_SITE
            })
            .collect();
        sites.sort_by_key(|&site| OrderedFloat(util::planar_distance(site, start)));
        sites.into_iter().find(|site| {
            self.query
                .placement_valid(Ability::Build_Hatchery, site.truncate())
        })
    }

    pub fn try_expand(&mut self) -> Result<(), FailureReason> {
        let site = self.rank_candidates().ok_or(FailureReason::NoValidTarget)?;
        self.try_build_structure(Ability::Build_Hatchery, site.truncate(), true)?;
        info!("Expanding to {}", site);
        let completed = self.game.town_halls().iter().filter(|t| t.completed()).count();
        if completed < STAGING_TOWN_HALLS {
            self.state.staging_location = util::midpoint(self.state.staging_location, site);
            info!("Staging moved to {}", self.state.staging_location);
        }
        Ok(())
    }

    /// Expands when drones are running out of work, or when minerals pile up.
    pub fn try_build_expansion_hatch(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        let demand = self.expected_worker_demand();
        if demand > self.state.max_worker_count as i32 {
            return Err(FailureReason::NoValidTarget);
        }
        if demand < game.food_workers() - 10 {
            return self.try_expand();
        }
        let hatcheries = game.count_any(&[
            UnitType::Zerg_Hatchery,
            UnitType::Zerg_Lair,
            UnitType::Zerg_Hive,
        ]) as i32;
        let bank = (hatcheries * EXPANSION_BANK_PER_HATCHERY).min(MAX_EXPANSION_BANK);
        if game.minerals() > bank {
            return self.try_expand();
        }
        Err(FailureReason::InsufficientResources)
    }
}
