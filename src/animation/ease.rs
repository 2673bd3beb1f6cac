/// Timing curves understood by the animation scheduler.
///
/// The non-linear curves are the standard cubic-bezier timing functions used by
/// platform animation engines, so a host can forward [`Ease::control_points`]
/// unchanged or sample [`Ease::apply`] itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    /// Bezier control points `(x1, y1, x2, y2)`; the end points are fixed at (0,0) and (1,1).
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_param_for_x(t, x1, x2);
        bezier_1d(s, y1, y2)
    }
}

fn bezier_1d(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

// x(s) is monotonic on [0, 1] for every curve above, so bisection always converges.
fn solve_param_for_x(x: f64, x1: f64, x2: f64) -> f64 {
    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    let mut s = x;
    for _ in 0..48 {
        let v = bezier_1d(s, x1, x2);
        if (v - x).abs() < 1e-9 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
