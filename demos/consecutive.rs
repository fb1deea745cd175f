// Consecutive reaction A -> B -> C, with the local diagnostic summary.

use chem_kinetics::report::report;
use chem_kinetics::{simulate, ReactionScheme, SimulationParams};

fn main() {
    let params = SimulationParams {
        scheme: ReactionScheme::Consecutive,
        k1: 1.0,
        k2: 0.5,
        ca0: 1.0,
        t_end: 20.0,
        dt: 0.05,
    };

    match simulate(&params) {
        Ok(solution) => {
            println!(
                "{:>8}  {:>12}  {:>22}  {:>12}",
                "t (s)",
                solution.labels()[0],
                solution.labels()[1],
                solution.labels()[2]
            );
            for (t, row) in solution
                .time()
                .iter()
                .zip(solution.concentrations().iter())
                .step_by(40)
            {
                println!(
                    "{:>8.3}  {:>12.6}  {:>22.6}  {:>12.6}",
                    t, row[0], row[1], row[2]
                );
            }
            // No external commentary service wired in, so this prints the
            // deterministic local summary.
            println!("{}", report(None, &params));
        }
        Err(e) => println!("An error occurred: {}", e),
    }
}
