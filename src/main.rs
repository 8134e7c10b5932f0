use pokemon_stadium::{
    ActionProvider, BattleAction, BattleSide, Combatant, Stadium, StadiumRng, Trainer,
    MAX_TEAM_SIZE,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Asks the player at the keyboard what their combatant should do.
struct ConsoleActionProvider;

impl ActionProvider for ConsoleActionProvider {
    fn choose_action(&mut self, _side: BattleSide, combatant: &Combatant) -> BattleAction {
        println!(
            "\nWhat should {} (Health: {}) do? (1 = Attack, 2 = Special Ability): ",
            combatant.get_name(),
            combatant.get_health()
        );
        match input(1, 2) {
            1 => BattleAction::Attack,
            _ => BattleAction::SpecialAbility,
        }
    }
}

fn read_line() -> String {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Prompt until the player enters an integer within `[min, max]`.
fn input(min: i64, max: i64) -> i64 {
    loop {
        let _ = io::stdout().flush();
        match read_line().parse::<i64>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!(
                "Invalid input. Please enter a number between {} and {}: ",
                min, max
            ),
        }
    }
}

fn set_up_trainer(label: &str, rng: &mut StadiumRng) -> Trainer {
    println!("Enter {}'s name: ", label);
    let mut name = read_line();
    if name.is_empty() {
        name = label.to_string();
    }
    let mut trainer = Trainer::new(name);

    println!(
        "Enter the size of {}'s team (max:{}): ",
        trainer.name(),
        MAX_TEAM_SIZE
    );
    let size = input(1, MAX_TEAM_SIZE as i64) as usize;
    if let Err(err) = trainer.build_team(size, rng) {
        println!("Could not build the team: {}", err);
    }
    trainer
}

fn choose_trainer_index() -> usize {
    println!("(1 = Trainer 1, 2 = Trainer 2): ");
    input(1, 2) as usize - 1
}

fn start_battle(stadium: &mut Stadium) {
    println!(
        "\nThe battle between {} and {} begins!",
        stadium.trainer(0).name(),
        stadium.trainer(1).name()
    );

    let mut picks = [String::new(), String::new()];
    for (index, pick) in picks.iter_mut().enumerate() {
        let trainer = stadium.trainer(index);
        println!("\nCurrent Team:");
        trainer.display_team();
        println!(
            "\n{}\nChoose a Pokemon to battle by its name: ",
            trainer.name()
        );
        *pick = read_line();
    }

    match stadium.battle(&picks[0], &picks[1], &mut ConsoleActionProvider) {
        Ok(report) => {
            for event in &report.events {
                println!("{}", event.format());
            }
        }
        Err(err) => println!("Unable to start the battle: {}", err),
    }
}

fn show_score(stadium: &Stadium) {
    let [wins1, wins2] = stadium.score();
    println!("\n--- Current Score ---");
    println!("{}: {} wins", stadium.trainer(0).name(), wins1);
    println!("{}: {} wins", stadium.trainer(1).name(), wins2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Welcome to the Pokemon Stadium!");

    let mut rng = StadiumRng::new_random();
    let trainer1 = set_up_trainer("Trainer 1", &mut rng);
    let trainer2 = set_up_trainer("Trainer 2", &mut rng);
    let mut stadium = Stadium::new(trainer1, trainer2);
    println!("Trainers and their teams are ready for battle!");

    loop {
        println!("\n--- Pokemon Stadium Menu ---");
        println!("1. Start a Battle");
        println!("2. Display a Trainer's Team");
        println!("3. Show Score");
        println!("4. Clear a Trainer's Team");
        println!("5. Quit");
        println!("Enter your choice: ");

        match input(1, 5) {
            1 => start_battle(&mut stadium),
            2 => {
                println!("Display team for which trainer?");
                stadium.trainer(choose_trainer_index()).display_team();
            }
            3 => show_score(&stadium),
            4 => {
                println!("Clear team for which trainer?");
                let index = choose_trainer_index();
                stadium.trainer_mut(index).clear_team();
                println!("{}'s team has been cleared.", stadium.trainer(index).name());
            }
            _ => {
                println!("Exiting Pokemon Stadium. Goodbye!");
                break;
            }
        }
    }
}
