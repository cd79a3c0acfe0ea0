use qmkit::*;
use simplelog::{Config, LevelFilter, SimpleLogger};

fn main() -> Result<(), QmError> {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).ok();

    let minterms = parse_minterms("0, 1, 2, 5, 6, 7, 8")?;
    let m = Minimization::solve(&minterms)?;
    println!("{} variables", m.variables());

    for (i, level) in m.tabulation().levels().iter().enumerate() {
        println!("Level {}:", i);
        for term in level.terms() {
            let mark = if level.is_checked(term) { "*" } else { " " };
            println!("  {} {}", mark, term);
        }
    }

    for step in m.context().steps() {
        println!("{}", step);
    }

    if let Some(petrick) = m.petrick() {
        println!("Petrick:");
        for (label, term) in petrick.labels() {
            println!("  {}: {}", label, term);
        }
    }

    let names: VarNames = "w x y z".parse()?;
    println!("{}", report(m.solutions(), &names)?);
    Ok(())
}
