#![no_main]

use libfuzzer_sys::fuzz_target;
use path_data::{parse_with, DrawingSink, NormalizingSink, NullTarget};

fuzz_target!(|data: &[u8]| {
    let Ok(data) = std::str::from_utf8(data) else {
        return;
    };
    let mut normalizing = NormalizingSink::new();
    let normalized = parse_with(data, &mut normalizing);
    let drawn = parse_with(data, &mut DrawingSink::new(&mut NullTarget));
    // both sinks see the same segments
    assert_eq!(normalized, drawn);

    let mut path = kurbo::BezPath::new();
    let _ = parse_with(data, &mut DrawingSink::new(&mut path));
});
