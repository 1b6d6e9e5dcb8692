mod cover_solution;
mod districts;
mod exhaustive_solver;
mod render;
mod solver;

use log::info;

use crate::cover_solution::CoverSolution;
use crate::exhaustive_solver::ExhaustiveSolver;
use crate::solver::Solver;
use covering::{CoverageInstance, SetCoverProgram};

fn main() {
    env_logger::init();

    let instance = districts::emergency_response_instance();
    info!(
        "placing centers for {} districts, response limit {} minutes",
        instance.num_points(),
        instance.threshold()
    );

    let program = SetCoverProgram::from_instance(&instance);
    let solver = ExhaustiveSolver::new(&program);

    match solver.solve() {
        Ok(centers) => {
            let solution = CoverSolution::new(&instance, centers);
            report(&instance, &solution);
            println!("{}", render::to_dot(&instance, &solution));
        }
        Err(err) => {
            println!("{}", err);
        }
    }
}

/// Console report of the cover; consumes solver output only.
fn report(instance: &CoverageInstance, solution: &CoverSolution) {
    println!("Number of emergency centers: {}", solution.centers().len());
    println!("Center locations:");
    for &center in solution.centers() {
        println!("  district {}", instance.label(center));
    }
    for point in 0..instance.num_points() {
        let center = solution.assigned_center(point);
        println!(
            "District {} is served by district {} ({} minutes away)",
            instance.label(point),
            instance.label(center),
            instance.distance(point, center)
        );
    }
    println!();
}
