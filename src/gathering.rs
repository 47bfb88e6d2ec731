use crate::classify::{is_mineral_field, is_town_hall};
use crate::*;
use glam::Vec2;
use log::trace;
use ordered_float::OrderedFloat;

impl<'a> Bot<'a> {
    /// Workers our completed bases and non-depleted extractors could use
    pub fn expected_worker_demand(&self) -> i32 {
        let game = self.game;
        let minerals: i32 = game
            .town_halls()
            .iter()
            .filter(|b| b.completed())
            .map(|b| b.ideal_harvesters)
            .sum();
        let gas: i32 = game
            .of_type(UnitType::Zerg_Extractor)
            .iter()
            .filter(|e| e.completed() && e.vespene_contents > 0)
            .map(|e| e.ideal_harvesters)
            .sum();
        minerals + gas
    }

    pub fn nearest_mineral(&self, to: Vec2) -> Result<&'a UnitSnapshot, FailureReason> {
        self.game
            .units(Alliance::Neutral, is_mineral_field)
            .into_iter()
            .min_by_key(|m| OrderedFloat(m.distance_squared(to)))
            .ok_or(FailureReason::NoValidTarget)
    }

    fn gather(&mut self, worker: &UnitSnapshot, node: Tag) {
        self.issue(worker.tag, Ability::Harvest_Gather, Target::Tag(node));
    }

    /// Sends the worker where it is needed most: gas first, then the first undersaturated base.
    /// Without any need, only an idle worker is sent to some base.
    pub fn rebalance(&mut self, worker: &UnitSnapshot) -> Result<(), FailureReason> {
        let game = self.game;
        let bases = game.town_halls();
        if bases.is_empty() {
            return Err(FailureReason::NoValidTarget);
        }
        if let Some(extractor) = game
            .of_type(UnitType::Zerg_Extractor)
            .into_iter()
            .find(|e| e.completed() && e.assigned_harvesters < e.ideal_harvesters)
        {
            self.gather(worker, extractor.tag);
            return Ok(());
        }
        if let Some(base) = bases.iter().find(|b| {
            b.completed() && b.ideal_harvesters > 0 && b.assigned_harvesters < b.ideal_harvesters
        }) {
            let mineral = self.nearest_mineral(base.position_2d())?;
            self.gather(worker, mineral.tag);
            return Ok(());
        }
        if !worker.idle() {
            return Err(FailureReason::NoValidTarget);
        }
        let base = self.pick(&bases).ok_or(FailureReason::NoValidTarget)?;
        let mineral = self.nearest_mineral(base.position_2d())?;
        self.gather(worker, mineral.tag);
        Ok(())
    }

    /// Moves at most one worker away from an oversaturated base or extractor, or onto an
    /// undersaturated extractor.
    pub fn detect_imbalance(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        let workers: Vec<_> = game
            .of_type(UnitType::Zerg_Drone)
            .into_iter()
            .filter(|w| self.tracker.is_available(w.tag))
            .collect();
        let working_on =
            |node: Tag| workers.iter().copied().find(|w| w.first_order_target() == Some(node));

        for base in game.town_halls() {
            if base.ideal_harvesters == 0 || !base.completed() {
                continue;
            }
            if base.assigned_harvesters > base.ideal_harvesters {
                if let Some(worker) = working_on(base.tag) {
                    trace!("{} oversaturated, moving {}", base.tag, worker.tag);
                    return self.rebalance(worker);
                }
            }
        }

        for extractor in game.of_type(UnitType::Zerg_Extractor) {
            if extractor.ideal_harvesters == 0 || !extractor.completed() {
                continue;
            }
            if extractor.assigned_harvesters > extractor.ideal_harvesters {
                if let Some(worker) = working_on(extractor.tag) {
                    trace!("{} oversaturated, moving {}", extractor.tag, worker.tag);
                    return self.rebalance(worker);
                }
            } else if extractor.assigned_harvesters < extractor.ideal_harvesters {
                let miner = workers.iter().copied().find(|w| {
                    w.first_order_target()
                        .and_then(|target| game.get_unit(target))
                        .map_or(false, |target| target.unit_type != UnitType::Zerg_Extractor)
                });
                if let Some(worker) = miner {
                    trace!("{} needs workers, moving {}", extractor.tag, worker.tag);
                    return self.rebalance(worker);
                }
            }
        }
        Err(FailureReason::NoValidTarget)
    }

    /// Idle drones that weren't given anything else this tick go mining.
    pub fn mine_idle_workers(&mut self) {
        let idle: Vec<_> = self
            .game
            .mine(|u| u.unit_type == UnitType::Zerg_Drone && u.idle() && u.completed())
            .into_iter()
            .filter(|w| self.tracker.is_available(w.tag))
            .collect();
        for worker in idle {
            if let Err(reason) = self.rebalance(worker) {
                trace!("{} stays idle: {}", worker.tag, reason);
            }
        }
    }

    /// Completed town halls that are not missing any mineral workers
    pub fn saturated_bases(&self) -> Vec<&'a UnitSnapshot> {
        self.game.mine(|u| {
            is_town_hall(u) && u.completed() && u.assigned_harvesters >= u.ideal_harvesters
        })
    }
}
