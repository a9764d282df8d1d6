#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{init_logging, play, server, simulate, AiPlayer, Client, Hub, RoomId, ServerConfig, TcpTransport};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the room server.
    Serve {
        #[arg(long, env = "SEABATTLE_BIND", help = "Address to listen on (falls back to PORT, then 0.0.0.0:5000)")]
        bind: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible room ids and first turns")]
        seed: Option<u64>,
    },
    /// Play two bots against each other in process and print the result as JSON.
    Local {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Connect a bot to a running server.
    Bot {
        #[arg(long, default_value = "127.0.0.1:5000")]
        connect: String,
        #[arg(long, help = "Room to join; a new room is created when omitted")]
        room: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, seed } => {
            let mut config = ServerConfig::from_env();
            if let Some(bind) = bind {
                config = config.with_bind(bind);
            }
            let hub = match seed {
                Some(s) => Hub::with_seed(s),
                None => Hub::new(),
            };
            server::run(config, hub).await?;
        }
        Commands::Local { seed } => {
            let report = simulate(seed).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Bot { connect, room, seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let transport = TcpTransport::connect(&connect).await?;
            let mut client = Client::connect(transport).await?;
            println!("Connected to {} as {}", connect, client.player());

            let room = match room {
                Some(id) => RoomId(id),
                None => {
                    let id = client.create_room().await?;
                    println!("Created room {}", id);
                    id
                }
            };
            client.join_room(&room).await?;
            println!("Joined room {}, placing fleet...", room);

            let mut bot = AiPlayer::new();
            let result = play(&mut client, &mut bot, &mut rng).await?;
            if result.won {
                println!("Victory after {} strikes", result.strikes);
            } else {
                println!("Defeat after {} strikes", result.strikes);
            }
        }
    }
    Ok(())
}
