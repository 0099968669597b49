use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args
        .get(1)
        .ok_or("Please provide a recipe URL as an argument")?;

    let path = chefkoch_export::export_recipe(url)?;
    println!("{}", path.display());

    Ok(())
}
