// First-order decay of a single reactant, printed as a small table.

use chem_kinetics::{simulate, ReactionScheme, SimulationParams};

fn main() {
    let params = SimulationParams {
        scheme: ReactionScheme::FirstOrder,
        k1: 0.5,
        k2: 0.2,
        ca0: 1.0,
        t_end: 10.0,
        dt: 0.05,
    };

    match simulate(&params) {
        Ok(solution) => {
            println!("{:>8}  {:>12}", "t (s)", solution.labels()[0]);
            for (t, row) in solution
                .time()
                .iter()
                .zip(solution.concentrations().iter())
                .step_by(20)
            {
                println!("{:>8.3}  {:>12.6}", t, row[0]);
            }
            println!("{}", solution.stats());
        }
        Err(e) => println!("An error occurred: {}", e),
    }
}
