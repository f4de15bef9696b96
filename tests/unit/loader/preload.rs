use std::sync::Mutex;

use super::*;

struct FakeSource;

impl SegmentSource for FakeSource {
    fn load(&self, source: &str) -> ReelResult<LoadedSegment> {
        let frames: u64 = source
            .parse()
            .map_err(|_| ReelError::load(format!("bad fake source '{source}'")))?;
        Ok(LoadedSegment {
            source: source.to_string(),
            name: None,
            total_frames: frames,
            fps: 30.0,
        })
    }
}

fn sources(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn joins_in_manifest_order_and_reports_progress() {
    let seen = Mutex::new(Vec::new());
    let out = preload(
        &sources(&["100", "150", "200", "120"]),
        &FakeSource,
        Some(4),
        &|p| seen.lock().unwrap().push(p),
    )
    .unwrap();

    assert_eq!(out.table.frame_counts(), &[100, 150, 200, 120]);
    assert_eq!(out.table.total_frames(), 570);
    assert_eq!(out.segments[2].source, "200");

    let mut seen = seen.into_inner().unwrap();
    seen.sort_by_key(|p| p.loaded);
    assert_eq!(seen.len(), 4);
    assert_eq!(seen.last().unwrap().percent(), 100.0);
    assert_eq!(seen[0].percent(), 25.0);
}

#[test]
fn any_failed_load_fails_the_join() {
    let err = preload(&sources(&["100", "oops"]), &FakeSource, Some(2), &|_| {}).unwrap_err();
    assert!(err.to_string().contains("oops"));
}

#[test]
fn empty_source_list_has_no_table() {
    assert!(preload(&[], &FakeSource, None, &|_| {}).is_err());
}

#[test]
fn zero_threads_is_rejected() {
    assert!(preload(&sources(&["1"]), &FakeSource, Some(0), &|_| {}).is_err());
}

#[test]
fn fs_source_reads_lottie_headers() {
    let dir = std::path::PathBuf::from("target").join("unit_preload");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("scene.json"),
        br#"{"nm":"scene","ip":0,"op":48,"fr":24,"w":10,"h":10,"layers":[]}"#,
    )
    .unwrap();

    let fs = FsSegmentSource::new(&dir);
    let seg = fs.load("scene.json").unwrap();
    assert_eq!(seg.total_frames, 48);
    assert_eq!(seg.name.as_deref(), Some("scene"));

    assert!(matches!(
        fs.load("https://example.com/scene.json"),
        Err(ReelError::Load(_))
    ));
    assert!(fs.load("missing.json").is_err());
}
