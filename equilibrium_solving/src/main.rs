mod armament;
mod equilibrium;
mod solver;
mod support_enumeration;

use log::info;

use crate::equilibrium::Equilibrium;
use crate::solver::Solver;
use crate::support_enumeration::SupportEnumerationSolver;
use bimatrix::Player;

fn main() {
    env_logger::init();

    let game = armament::armament_game();
    info!("enumerating equilibria; zero-sum: {}", game.is_zero_sum());

    let solver = SupportEnumerationSolver::new(&game);
    let equilibria = solver.solve();

    report(&equilibria);
}

/// Console report of the enumerated equilibria; consumes solver output only.
fn report(equilibria: &[Equilibrium]) {
    println!("Number of equilibria found: {}", equilibria.len());
    for equilibrium in equilibria.iter() {
        println!(
            "Country A strategy [{}, {}]: {:?}, payoff: {}",
            armament::ACTION_LABELS[0],
            armament::ACTION_LABELS[1],
            equilibrium.strategy(Player::Row).inner(),
            equilibrium.payoff(Player::Row)
        );
        println!(
            "Country B strategy [{}, {}]: {:?}, payoff: {}",
            armament::ACTION_LABELS[0],
            armament::ACTION_LABELS[1],
            equilibrium.strategy(Player::Column).inner(),
            equilibrium.payoff(Player::Column)
        );
    }
}
