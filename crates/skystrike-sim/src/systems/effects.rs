//! One-shot timed effects on presentation state.
//!
//! Effects are scheduled against host timestamps and fire on the first tick at
//! or after their due time. They never touch simulation entities.

use skystrike_core::constants::MUZZLE_FLASH_MS;
use skystrike_core::enums::Gun;
use skystrike_core::state::MuzzleFlashView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    HideMuzzleFlash(Gun),
}

#[derive(Debug, Clone, Default)]
pub struct EffectScheduler {
    /// Pending effects with their due time, in scheduling order.
    pending: Vec<(f64, Effect)>,
    muzzle_flash: [bool; 2],
}

impl EffectScheduler {
    pub fn schedule(&mut self, due_ms: f64, effect: Effect) {
        self.pending.push((due_ms, effect));
    }

    /// Show a gun's muzzle flash and schedule it to hide.
    pub fn flash_muzzle(&mut self, gun: Gun, now_ms: f64) {
        self.muzzle_flash[gun.index()] = true;
        self.schedule(now_ms + MUZZLE_FLASH_MS, Effect::HideMuzzleFlash(gun));
    }

    /// Apply every effect due at `now_ms`.
    pub fn run(&mut self, now_ms: f64) {
        let mut due = Vec::new();
        self.pending.retain(|&(at, effect)| {
            if at <= now_ms {
                due.push(effect);
                false
            } else {
                true
            }
        });
        for effect in due {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::HideMuzzleFlash(gun) => self.muzzle_flash[gun.index()] = false,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn muzzle_flashes(&self) -> MuzzleFlashView {
        MuzzleFlashView {
            left: self.muzzle_flash[Gun::Left.index()],
            right: self.muzzle_flash[Gun::Right.index()],
        }
    }
}
