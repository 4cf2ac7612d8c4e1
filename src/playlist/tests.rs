use super::*;
use crate::library::Track;

fn t(name: &str) -> Track {
    Track {
        display: name.to_string(),
        path: std::path::PathBuf::from(format!("/music/{name}")),
        album_art: None,
    }
}

fn names(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.display.as_str()).collect()
}

fn sorted_names(tracks: &[Track]) -> Vec<&str> {
    let mut v = names(tracks);
    v.sort_unstable();
    v
}

#[test]
fn append_preserves_scan_order() {
    let mut pl = Playlist::new();
    pl.append(vec![t("a.mp3"), t("b.mp3")]);
    pl.append(vec![t("c.mp3")]);

    assert_eq!(names(pl.original()), vec!["a.mp3", "b.mp3", "c.mp3"]);
    assert_eq!(names(pl.working()), vec!["a.mp3", "b.mp3", "c.mp3"]);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut pl = Playlist::new();
    pl.append((0..32).map(|i| t(&format!("{i}.mp3"))).collect());

    pl.set_shuffled(true);
    assert_eq!(pl.len(), pl.original().len());
    assert_eq!(sorted_names(pl.working()), sorted_names(pl.original()));
}

#[test]
fn shuffle_off_restores_original_order_exactly() {
    let mut pl = Playlist::new();
    pl.append((0..16).map(|i| t(&format!("{i}.mp3"))).collect());

    pl.set_shuffled(true);
    pl.set_shuffled(false);
    assert!(!pl.is_shuffled());
    assert_eq!(names(pl.working()), names(pl.original()));
}

#[test]
fn append_while_shuffled_keeps_permutation_invariant() {
    let mut pl = Playlist::new();
    pl.append((0..8).map(|i| t(&format!("{i}.mp3"))).collect());
    pl.set_shuffled(true);

    pl.append(vec![t("late.mp3")]);
    assert!(pl.is_shuffled());
    assert_eq!(pl.len(), 9);
    assert_eq!(sorted_names(pl.working()), sorted_names(pl.original()));
}

#[test]
fn append_while_unshuffled_lands_new_tracks_at_the_end() {
    let mut pl = Playlist::new();
    pl.append(vec![t("a.mp3")]);
    pl.set_shuffled(true);
    pl.set_shuffled(false);

    pl.append(vec![t("b.mp3")]);
    assert_eq!(names(pl.working()), vec!["a.mp3", "b.mp3"]);
}

#[test]
fn original_is_never_reordered_by_shuffle() {
    let mut pl = Playlist::new();
    pl.append((0..16).map(|i| t(&format!("{i}.mp3"))).collect());
    let before: Vec<String> = pl.original().iter().map(|t| t.display.clone()).collect();

    pl.set_shuffled(true);
    pl.append(vec![t("late.mp3")]);
    let after: Vec<&str> = names(pl.original());

    assert_eq!(&after[..before.len()], &before.iter().map(String::as_str).collect::<Vec<_>>()[..]);
    assert_eq!(after.last(), Some(&"late.mp3"));
}

#[test]
fn at_is_none_out_of_range() {
    let mut pl = Playlist::new();
    assert!(pl.at(0).is_none());

    pl.append(vec![t("a.mp3")]);
    assert_eq!(pl.at(0).map(|t| t.display.as_str()), Some("a.mp3"));
    assert!(pl.at(1).is_none());
}

#[test]
fn duplicate_paths_across_folders_stay_distinct() {
    let mut pl = Playlist::new();
    pl.append(vec![
        Track {
            display: "a.mp3".into(),
            path: "/rock/a.mp3".into(),
            album_art: None,
        },
        Track {
            display: "a.mp3".into(),
            path: "/jazz/a.mp3".into(),
            album_art: None,
        },
    ]);

    assert_eq!(pl.len(), 2);
    assert_ne!(pl.at(0).unwrap().path, pl.at(1).unwrap().path);
}
