use std::time::Duration;

use crate::models::{Era, EraDescriptor};

/// Default USD to INR conversion rate for a session.
pub const USD_TO_INR: f64 = 83.5;

pub const COMPARE_CAPACITY: usize = 3;
pub const FEATURED_LIMIT: usize = 5;
pub const ERA_BUCKET_LIMIT: usize = 3;
pub const ADMIN_PREVIEW_LIMIT: usize = 15;

/// Simulated latency of the admin market sync.
pub const REFRESH_DELAY: Duration = Duration::from_secs(2);

// Jitter tuning: factor = 1 + (u - JITTER_CENTER) * JITTER_SPAN, u in [0, 1).
// Carried over unchanged; neither value is derived from anything.
pub const JITTER_CENTER: f64 = 0.45;
pub const JITTER_SPAN: f64 = 0.05;

pub const IMAGE_BASE: &str = "https://picsum.photos/seed";

/// The ordered era table consumed by the timeline.
pub fn eras() -> Vec<EraDescriptor> {
    vec![
        EraDescriptor::new(Era::Classic, "Classic Era (1996-2000)", 1996, 2000),
        EraDescriptor::new(Era::Neo, "Neo Era (2000-2002)", 2000, 2002),
        EraDescriptor::new(Era::ESeries, "E-Card Era (2002-2003)", 2002, 2003),
        EraDescriptor::new(Era::Ex, "EX Era (2003-2007)", 2003, 2007),
        EraDescriptor::new(Era::Dp, "Diamond & Pearl (2007-2010)", 2007, 2010),
        EraDescriptor::new(Era::Bw, "Black & White (2011-2013)", 2011, 2013),
        EraDescriptor::new(Era::Xy, "XY Era (2014-2016)", 2014, 2016),
        EraDescriptor::new(Era::Sm, "Sun & Moon (2017-2019)", 2017, 2019),
        EraDescriptor::new(Era::Swsh, "Sword & Shield (2020-2022)", 2020, 2022),
        EraDescriptor::new(Era::Sv, "Scarlet & Violet (2023-Present)", 2023, 2025),
    ]
}
