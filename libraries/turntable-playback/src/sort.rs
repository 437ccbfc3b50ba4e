//! Sort specification and track ordering
//!
//! Derives a total order over a track collection from a mutable sort
//! spec, with the tri-state toggle the column headers use.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use turntable_core::Track;

/// Sortable track attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog identifier (the default presentation order)
    #[default]
    Id,
    /// Track title
    Title,
    /// Artist name
    Artist,
    /// Album name
    Album,
    /// Genre
    Genre,
    /// Release year
    Year,
}

/// Current sort criteria for the displayed collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Attribute to order by
    pub key: SortKey,

    /// Direction; descending negates the comparator
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Id,
            ascending: true,
        }
    }
}

impl SortSpec {
    /// Apply a user selection of `key` to this spec
    ///
    /// Selecting a new key sorts by it ascending. Reselecting the
    /// active key flips to descending, and a third selection resets to
    /// the default (`Id` ascending) instead of cycling back — a
    /// deliberate shortcut back to catalog order. `Id` itself only
    /// alternates between ascending and descending.
    pub fn toggled(self, key: SortKey) -> Self {
        if key != self.key {
            return Self {
                key,
                ascending: true,
            };
        }

        if self.ascending {
            Self {
                key,
                ascending: false,
            }
        } else if key == SortKey::Id {
            Self {
                key,
                ascending: true,
            }
        } else {
            Self::default()
        }
    }
}

/// Sort a collection in place according to `spec`
///
/// String attributes compare case-sensitively, absent values as the
/// empty string. Numeric attributes compare numerically, absent year
/// as 0. Ordering between absent and present values on tied keys is
/// not part of the contract.
pub fn sort_tracks(tracks: &mut [Track], spec: SortSpec) {
    tracks.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, spec.key);
        if spec.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare_by_key(a: &Track, b: &Track, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Artist => opt_str(&a.artist).cmp(opt_str(&b.artist)),
        SortKey::Album => opt_str(&a.album).cmp(opt_str(&b.album)),
        SortKey::Genre => opt_str(&a.genre).cmp(opt_str(&b.genre)),
        SortKey::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
    }
}

fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use turntable_core::TrackId;

    fn track(id: i64, title: &str) -> Track {
        Track::new(TrackId(id), PathBuf::from(format!("/music/{id}.mp3")), title)
    }

    #[test]
    fn selecting_new_key_sorts_ascending() {
        let spec = SortSpec::default().toggled(SortKey::Title);
        assert_eq!(spec.key, SortKey::Title);
        assert!(spec.ascending);
    }

    #[test]
    fn tri_state_toggle_resets_on_third_click() {
        let first = SortSpec::default().toggled(SortKey::Title);
        assert_eq!(
            first,
            SortSpec {
                key: SortKey::Title,
                ascending: true
            }
        );

        let second = first.toggled(SortKey::Title);
        assert_eq!(
            second,
            SortSpec {
                key: SortKey::Title,
                ascending: false
            }
        );

        let third = second.toggled(SortKey::Title);
        assert_eq!(third, SortSpec::default());
    }

    #[test]
    fn switching_key_discards_toggle_state() {
        let descending_title = SortSpec {
            key: SortKey::Title,
            ascending: false,
        };

        let spec = descending_title.toggled(SortKey::Artist);
        assert_eq!(spec.key, SortKey::Artist);
        assert!(spec.ascending);
    }

    #[test]
    fn id_key_never_resets() {
        let asc = SortSpec::default();
        let desc = asc.toggled(SortKey::Id);
        assert!(!desc.ascending);

        // Third click on Id flips back to ascending, no reset state exists
        let again = desc.toggled(SortKey::Id);
        assert_eq!(again, SortSpec::default());
        let fourth = again.toggled(SortKey::Id);
        assert!(!fourth.ascending);
    }

    #[test]
    fn sorts_by_title() {
        let mut tracks = vec![track(1, "Charlie"), track(2, "Alpha"), track(3, "Bravo")];

        sort_tracks(
            &mut tracks,
            SortSpec {
                key: SortKey::Title,
                ascending: true,
            },
        );

        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn descending_reverses_order() {
        let mut tracks = vec![track(1, "Alpha"), track(2, "Bravo")];

        sort_tracks(
            &mut tracks,
            SortSpec {
                key: SortKey::Title,
                ascending: false,
            },
        );

        assert_eq!(tracks[0].title, "Bravo");
        assert_eq!(tracks[1].title, "Alpha");
    }

    #[test]
    fn absent_strings_sort_as_empty() {
        let mut with_artist = track(1, "A");
        with_artist.artist = Some("Muse".into());
        let without_artist = track(2, "B");

        let mut tracks = vec![with_artist, without_artist];
        sort_tracks(
            &mut tracks,
            SortSpec {
                key: SortKey::Artist,
                ascending: true,
            },
        );

        // Empty string sorts before any artist name
        assert!(tracks[0].artist.is_none());
        assert_eq!(tracks[1].artist.as_deref(), Some("Muse"));
    }

    #[test]
    fn year_sorts_numerically() {
        let mut a = track(1, "A");
        a.year = Some(2001);
        let mut b = track(2, "B");
        b.year = Some(1979);
        let c = track(3, "C"); // no year, sorts as 0

        let mut tracks = vec![a, b, c];
        sort_tracks(
            &mut tracks,
            SortSpec {
                key: SortKey::Year,
                ascending: true,
            },
        );

        let years: Vec<Option<u32>> = tracks.iter().map(|t| t.year).collect();
        assert_eq!(years, [None, Some(1979), Some(2001)]);
    }

    #[test]
    fn default_spec_is_id_ascending() {
        let mut tracks = vec![track(3, "C"), track(1, "A"), track(2, "B")];
        sort_tracks(&mut tracks, SortSpec::default());

        let ids: Vec<i64> = tracks.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
