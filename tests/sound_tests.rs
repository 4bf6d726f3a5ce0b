//! Tick sound lookup and best-effort loading. None of these need an audio device.

use std::fs;
use std::path::Path;

use desk_clock::sound::{candidate_paths, locate, TICK_SOUND_FILE};
use desk_clock::TickSound;

#[test]
fn exe_dir_is_preferred_over_cwd() {
    let paths = candidate_paths(Some(Path::new("/opt/clock")), Some(Path::new("/home/me")));
    assert_eq!(
        paths,
        vec![
            Path::new("/opt/clock").join(TICK_SOUND_FILE),
            Path::new("/home/me").join(TICK_SOUND_FILE),
        ]
    );
}

#[test]
fn same_dir_is_listed_once() {
    let dir = Path::new("/opt/clock");
    assert_eq!(candidate_paths(Some(dir), Some(dir)).len(), 1);
    assert!(candidate_paths(None, None).is_empty());
}

#[test]
fn locate_skips_missing_files() {
    let empty = tempfile::tempdir().unwrap();
    let with_sound = tempfile::tempdir().unwrap();
    fs::write(with_sound.path().join(TICK_SOUND_FILE), b"RIFF").unwrap();

    let candidates = candidate_paths(Some(empty.path()), Some(with_sound.path()));
    assert_eq!(
        locate(&candidates),
        Some(with_sound.path().join(TICK_SOUND_FILE))
    );
}

#[test]
fn locate_ignores_directories_named_like_the_sound() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(TICK_SOUND_FILE)).unwrap();
    assert_eq!(locate(&candidate_paths(Some(dir.path()), None)), None);
}

#[test]
fn missing_file_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let err = TickSound::start(&dir.path().join(TICK_SOUND_FILE)).err().unwrap();
    assert!(format!("{err:#}").contains("failed to open"));
}

#[test]
fn garbage_file_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TICK_SOUND_FILE);
    fs::write(&path, b"definitely not a wave file").unwrap();
    let err = TickSound::start(&path).err().unwrap();
    assert!(format!("{err:#}").contains("failed to decode"));
}
