use race_core::segment::{SegmentSource, SegmentStream};

pub fn segments(count: u32, seed: Option<u64>, json: bool) {
    let mut stream = match seed {
        Some(seed) => SegmentStream::with_seed(seed),
        None => SegmentStream::new(),
    };
    let segments: Vec<_> = (0..count).map(|_| stream.next_segment()).collect();

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&segments), "Error: {}")
        );
        return;
    }

    for seg in &segments {
        println!(
            "#{:<3} d{} {:>5.1}s  {}",
            seg.index, seg.difficulty, seg.time_limit, seg.text
        );
    }
}
