#![no_main]

use boxlay_core::geometry::{PixelBounds, PixelPoint};
use boxlay_core::zone::{Zone, in_hit_area, which_zone, zone_contains};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (f32, f32, f32, f32, f32, f32, f32)| {
    let (top, left, height, width, x, y, margin) = data;
    let values = [top, left, height, width, x, y, margin];
    if values.iter().any(|v| !v.is_finite() || v.abs() > 1.0e6) || margin <= 0.0 {
        return;
    }
    let rect = PixelBounds::new(top.into(), left.into(), height.into(), width.into());
    let point = PixelPoint::new(x.into(), y.into());
    let margin = f64::from(margin);

    let hit = which_zone(&rect, point, margin);
    assert_eq!(hit.is_some(), in_hit_area(&rect, point, margin), "zones do not tile the hit area");
    if let Some(zone) = hit {
        assert!(zone_contains(&rect, zone, margin, point));
        for earlier in Zone::PRIORITY.iter().take_while(|z| **z != zone) {
            assert!(!zone_contains(&rect, *earlier, margin, point), "priority broken");
        }
    }
});
