use seabattle::simulate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let report = simulate(seed).await?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
