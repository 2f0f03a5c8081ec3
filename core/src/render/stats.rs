//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;

//
// Types
//

/// Collects and accumulates rendering statistics.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of frames presented.
    pub frames: usize,
    /// Number of color buffer clears.
    pub clears: usize,

    /// Primitives, vertices, and fragments input/output.
    pub prims: Throughput,
    pub verts: Throughput,
    pub frags: Throughput,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    // Count of items submitted for rendering.
    pub i: usize,
    // Count of items output to the render target.
    pub o: usize,
}

//
// Impls
//

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the average throughput in items per frame.
    pub fn per_frame(&self) -> Self {
        let frames = self.frames.max(1);
        let [prims, verts, frags] =
            self.throughput().map(|stat| stat.per_frame(frames));
        Self {
            frames: 1,
            clears: self.clears / frames,
            prims,
            verts,
            frags,
        }
    }

    fn throughput(&self) -> [Throughput; 3] {
        [self.prims, self.verts, self.frags]
    }
}

impl Throughput {
    fn per_frame(&self, frames: usize) -> Self {
        Self {
            i: self.i / frames,
            o: self.o / frames,
        }
    }
}

impl Display for Stats {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(16);
        let per_f = self.per_frame();
        write!(f,
            " STATS  {:>w$} │ {:>w$}\n\
             ────────{empty:─>w$}─┼─{empty:─>w$}─\n \
              frames {:>w$} │\n \
              clears {:>w$} │ {:>w$}\n\
             ────────{empty:─>w$}─┼─{empty:─>w$}─\n",
            "TOTAL", "PER FRAME",
            self.frames,
            self.clears, per_f.clears,
            empty = ""
        )?;

        let labels = ["prims", "verts", "frags"];
        let rows = self.throughput().into_iter().zip(per_f.throughput());
        for (lbl, (tot, per_f)) in labels.into_iter().zip(rows) {
            if f.alternate() {
                writeln!(f, " {lbl:6} {tot:#w$} │ {per_f:#w$}")?;
            } else {
                writeln!(f, " {lbl:6} {tot:w$} │ {per_f:w$}")?;
            }
        }
        Ok(())
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let &Self { i, o } = self;
        let w = f.width().unwrap_or(10);
        if f.alternate() {
            if i == 0 {
                write!(f, "{:>w$}", "--")
            } else {
                let pct = 100.0 * o as f32 / i as f32;
                write!(f, "{pct:>w$.1}%", w = w - 1)
            }
        } else {
            let io = format!("{} / {}", human_num(i), human_num(o));
            write!(f, "{io:>w$}")
        }
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.frames += other.frames;
        self.clears += other.clears;
        self.prims += other.prims;
        self.verts += other.verts;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

fn human_num(n: usize) -> String {
    if n < 1_000 {
        format!("{n:5}")
    } else if n < 100_000 {
        format!("{:4.1}k", n as f32 / 1_000.)
    } else if n < 1_000_000 {
        format!("{:4}k", n / 1_000)
    } else if n < 100_000_000 {
        format!("{:4.1}M", n as f32 / 1_000_000.)
    } else {
        format!("{:4}M", n / 1_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Stats {
        Stats {
            frames: 10,
            clears: 20,
            prims: Throughput { i: 1000, o: 800 },
            verts: Throughput { i: 3000, o: 2400 },
            frags: Throughput { i: 123456, o: 61728 },
        }
    }

    #[test]
    fn per_frame() {
        let per_f = stats().per_frame();
        assert_eq!(per_f.frames, 1);
        assert_eq!(per_f.clears, 2);
        assert_eq!(per_f.prims, Throughput { i: 100, o: 80 });
        assert_eq!(per_f.frags, Throughput { i: 12345, o: 6172 });
    }

    #[test]
    fn per_frame_with_no_frames() {
        let s = Stats {
            verts: Throughput { i: 3, o: 3 },
            ..Stats::new()
        };
        assert_eq!(s.per_frame().verts, Throughput { i: 3, o: 3 });
    }

    #[test]
    fn add_assign() {
        let mut s = stats();
        s += stats();
        assert_eq!(s.frames, 20);
        assert_eq!(s.clears, 40);
        assert_eq!(s.verts, Throughput { i: 6000, o: 4800 });
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(10), "   10");
        assert_eq!(human_num(123), "  123");
        assert_eq!(human_num(1_234), " 1.2k");
        assert_eq!(human_num(123_456), " 123k");
        assert_eq!(human_num(1_234_567), " 1.2M");
        assert_eq!(human_num(123_456_789), " 123M");
    }

    #[test]
    fn throughput_display() {
        let t = Throughput { i: 200, o: 50 };
        assert_eq!(format!("{t}"), "  200 /    50");
        assert_eq!(format!("{t:#8}"), "   25.0%");
        assert_eq!(format!("{:#8}", Throughput::default()), "      --");
    }
}
