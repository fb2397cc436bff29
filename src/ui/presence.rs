//! Mount/unmount timeline for catalog cards.
//!
//! The collection view is a pure function of its inputs and declares the
//! motion of every card; this is the host side that remembers what was on
//! screen last frame so those declared edges (enter, update, exit) can be
//! played back. Each card runs on its own clock, so an exit never holds up an
//! entrance.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogItem, ItemId};
use crate::ui::collection::{CardSlot, CollectionView};
use crate::ui::motion::{diff_keys, Edge, Motion, MotionFrame};
use crate::ui::view_state::ViewKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Present,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    key: ItemId,
    item: CatalogItem,
    phase: Phase,
    mounted_at: Instant,
    started: Instant,
    motion: Option<Motion>,
    /// Played when the key leaves the input.
    exit: Motion,
}

impl Track {
    fn entering(card: &CardSlot<'_>, now: Instant) -> Self {
        Self {
            key: card.key,
            item: card.item.clone(),
            phase: Phase::Entering,
            mounted_at: now,
            started: now,
            motion: Some(card.enter),
            exit: card.exit,
        }
    }

    fn begin_exit(&mut self, now: Instant) {
        self.phase = Phase::Exiting;
        self.started = now;
        self.motion = Some(self.exit);
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.motion
            .map(|motion| motion.is_finished(now.saturating_duration_since(self.started)))
            .unwrap_or(true)
    }
}

/// A card the host should draw this frame.
///
/// `item` is the latest snapshot seen for the key, so exiting cards can still
/// be drawn after they left the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<'a> {
    pub key: ItemId,
    pub phase: Phase,
    pub item: &'a CatalogItem,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct EmptyEntrance {
    since: Instant,
    motion: Motion,
}

#[derive(Debug, Clone, Default)]
pub struct Presence {
    kind: Option<ViewKind>,
    kind_since: Option<Instant>,
    tracks: Vec<Track>,
    empty: Option<EmptyEntrance>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the edges between the previous render and `view`.
    pub fn sync(&mut self, view: &CollectionView<'_>, now: Instant) {
        let kind = view.kind();
        let previous = self.kind.replace(kind);
        let changed = previous != Some(kind);
        if changed {
            self.kind_since = Some(now);
        }

        match view {
            CollectionView::Loading { .. } => {
                self.tracks.clear();
                self.empty = None;
            }
            CollectionView::Empty { enter, .. } => {
                self.tracks.clear();
                if changed {
                    self.empty = Some(EmptyEntrance {
                        since: now,
                        motion: *enter,
                    });
                }
            }
            CollectionView::Populated { cards } => {
                self.empty = None;
                if changed {
                    self.tracks.clear();
                }
                self.apply_edges(cards, now);
            }
        }
    }

    fn apply_edges(&mut self, next: &[CardSlot<'_>], now: Instant) {
        let next_keys: Vec<ItemId> = next.iter().map(|card| card.key).collect();
        let previous_order: Vec<ItemId> = self.tracks.iter().map(|track| track.key).collect();
        let live: Vec<ItemId> = self
            .tracks
            .iter()
            .filter(|track| track.phase != Phase::Exiting)
            .map(|track| track.key)
            .collect();
        let mut old: HashMap<ItemId, Track> =
            self.tracks.drain(..).map(|track| (track.key, track)).collect();

        let mut merged: Vec<Track> = Vec::with_capacity(next.len());
        let mut index = 0;
        for (key, edge) in diff_keys(&live, &next_keys) {
            match edge {
                Edge::Enter => {
                    old.remove(&key);
                    merged.push(Track::entering(&next[index], now));
                    index += 1;
                }
                Edge::Update => {
                    if let Some(mut track) = old.remove(&key) {
                        track.item = next[index].item.clone();
                        track.exit = next[index].exit;
                        merged.push(track);
                    }
                    index += 1;
                }
                Edge::Exit => {
                    if let Some(track) = old.get_mut(&key) {
                        track.begin_exit(now);
                    }
                }
            }
        }

        // Whatever is left is exiting (newly or still). Keep it where it was.
        for (position, key) in previous_order.iter().enumerate() {
            let Some(track) = old.remove(key) else {
                continue;
            };
            let anchor = previous_order[..position]
                .iter()
                .rev()
                .find_map(|before| merged.iter().position(|t| t.key == *before));
            let at = anchor.map(|i| i + 1).unwrap_or(0);
            merged.insert(at, track);
        }

        self.tracks = merged;
    }

    /// Settles finished entrances and unmounts finished exits.
    pub fn prune(&mut self, now: Instant) {
        self.tracks.retain(|track| !(track.phase == Phase::Exiting && track.is_finished(now)));
        for track in &mut self.tracks {
            if track.phase == Phase::Entering && track.is_finished(now) {
                track.phase = Phase::Present;
                track.motion = None;
            }
        }
    }

    /// Cards to draw, in grid order.
    pub fn rendered(&self) -> Vec<Slot<'_>> {
        self.tracks
            .iter()
            .map(|track| Slot {
                key: track.key,
                phase: track.phase,
                item: &track.item,
            })
            .collect()
    }

    pub fn phase(&self, key: ItemId) -> Option<Phase> {
        self.track(key).map(|track| track.phase)
    }

    /// When the card for `key` was mounted. Unchanged while the card survives re-renders.
    pub fn mounted_at(&self, key: ItemId) -> Option<Instant> {
        self.track(key).map(|track| track.mounted_at)
    }

    /// The running motion of a card, if any.
    pub fn motion(&self, key: ItemId) -> Option<Motion> {
        self.track(key).and_then(|track| track.motion)
    }

    pub fn frame_for(&self, key: ItemId, now: Instant) -> MotionFrame {
        match self.track(key) {
            Some(track) => track
                .motion
                .map(|motion| motion.sample(now.saturating_duration_since(track.started)))
                .unwrap_or(MotionFrame::REST),
            None => MotionFrame::REST,
        }
    }

    /// When the current "no results" panel started its entrance.
    pub fn empty_since(&self) -> Option<Instant> {
        self.empty.map(|empty| empty.since)
    }

    pub fn empty_frame(&self, now: Instant) -> MotionFrame {
        match self.empty {
            Some(empty) => empty.motion.sample(now.saturating_duration_since(empty.since)),
            None => MotionFrame::REST,
        }
    }

    /// Time spent in the current presentation; drives the skeleton pulse.
    pub fn elapsed_in_view(&self, now: Instant) -> Duration {
        self.kind_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default()
    }

    /// Whether another frame is needed to finish what is playing.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.kind {
            Some(ViewKind::Loading) => true,
            Some(ViewKind::Empty) => self
                .empty
                .map(|empty| !empty.motion.is_finished(now.saturating_duration_since(empty.since)))
                .unwrap_or(false),
            Some(ViewKind::Populated) => self.tracks.iter().any(|track| !track.is_finished(now)),
            None => false,
        }
    }

    fn track(&self, key: ItemId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.key == key)
    }
}
