use std::time::{Duration, Instant};

use toruslife::{Grid, Transitions};

/// How often a report is produced
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// One stepped generation, as written to the csv
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sample {
    generation: u64,
    delta_micros: u128,
    alive: usize,
    transitions: Transitions,
}

/// Population statistics of a running [`Grid`]
///
/// Tracks the generation rate for periodic reports and, when enabled, keeps a
/// sample of every generation for csv export.
pub struct Stats {
    generation: u64,
    alive: usize,
    last_transitions: Transitions,
    gens_in_report: usize,
    last_report: Instant,
    last_step: Instant,
    samples: Option<Vec<Sample>>,
}

impl Stats {
    pub fn new(grid: &Grid, csv: bool) -> Self {
        let now = Instant::now();
        Self {
            generation: grid.generation(),
            alive: grid.alive_count(),
            last_transitions: Transitions::default(),
            gens_in_report: 0,
            last_report: now,
            last_step: now,
            samples: csv.then(Vec::new),
        }
    }

    /// Starts over from the grid's current state, e.g. after it was randomized
    pub fn reset(&mut self, grid: &Grid) {
        *self = Self::new(grid, self.samples.is_some());
    }

    /// Records the generation the grid has just stepped into
    pub fn record(&mut self, grid: &Grid, transitions: Transitions) {
        let delta_micros = self.last_step.elapsed().as_micros();
        self.last_step = Instant::now();

        self.generation = grid.generation();
        self.alive = grid.alive_count();
        self.last_transitions = transitions;
        self.gens_in_report += 1;

        if let Some(samples) = &mut self.samples {
            samples.push(Sample {
                generation: self.generation,
                delta_micros,
                alive: self.alive,
                transitions,
            });
        }
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }

    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset rate for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gen:{} alive:{} +{} -{}",
            gens_per_sec,
            self.generation,
            self.alive,
            self.last_transitions.births,
            self.last_transitions.deaths
        )
    }

    pub fn write_csv<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_t,alive,births,deaths\n")?;
        for sample in self.samples.iter().flatten() {
            writeln!(
                out,
                "{},{},{},{},{}",
                sample.generation,
                sample.delta_micros,
                sample.alive,
                sample.transitions.births,
                sample.transitions.deaths
            )?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toruslife::Pos2;

    fn blinker() -> Grid {
        let mut grid = Grid::new(7);
        for x in 2..=4 {
            let index = grid.index_of(Pos2 { x, y: 3 });
            grid.set_alive(index, true);
        }
        grid
    }

    fn csv_rows(stats: &Stats) -> Vec<String> {
        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn report_follows_the_grid() {
        let mut grid = blinker();
        let mut stats = Stats::new(&grid, false);
        let transitions = grid.step();
        stats.record(&grid, transitions);

        let report = stats.report();
        assert!(report.ends_with("gen:1 alive:3 +2 -2"), "{report}");
        assert_eq!(stats.gens_in_report, 0);
    }

    #[test]
    fn csv_has_a_row_per_generation() {
        let mut grid = blinker();
        let mut stats = Stats::new(&grid, true);
        for _ in 0..2 {
            let transitions = grid.step();
            stats.record(&grid, transitions);
        }

        let rows = csv_rows(&stats);
        assert_eq!(rows[0], "gen,delta_t,alive,births,deaths");
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("1,") && rows[1].ends_with(",3,2,2"));
        assert!(rows[2].starts_with("2,") && rows[2].ends_with(",3,2,2"));
    }

    #[test]
    fn reset_starts_from_a_randomized_grid() {
        let mut grid = blinker();
        let mut stats = Stats::new(&grid, true);
        for _ in 0..3 {
            let transitions = grid.step();
            stats.record(&grid, transitions);
        }

        grid.randomize();
        stats.reset(&grid);

        assert!(stats.samples.is_some());
        assert_eq!(csv_rows(&stats).len(), 1);
        let report = stats.report();
        let expected = format!("gen:0 alive:{} +0 -0", grid.alive_count());
        assert!(report.ends_with(&expected), "{report}");
    }

    #[test]
    fn samples_are_optional() {
        let grid = Grid::new(3);

        assert!(Stats::new(&grid, true).samples.is_some());
        assert!(Stats::new(&grid, false).samples.is_none());
        assert_eq!(csv_rows(&Stats::new(&grid, false)).len(), 1);
    }
}
