use clap::{Parser, Subcommand, ValueEnum};
use spotify_webapi::{ApiConfig, Executors, SpotifyApi};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify-cli")]
#[command(about = "Query the Spotify Web API from the command line", long_about = None)]
struct Cli {
    /// Spotify access token (can also be set via SPOTIFY_ACCESS_TOKEN env var)
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Market to request content for, e.g. SE
    #[arg(short, long)]
    market: Option<String>,

    /// Override the API endpoint
    #[arg(long, default_value = spotify_webapi::api::SPOTIFY_WEB_API_ENDPOINT)]
    base_url: String,

    /// Log every HTTP call
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an album and its tracks
    Album {
        /// Spotify album ID
        id: String,
    },
    /// Show a track
    Track {
        /// Spotify track ID
        id: String,
    },
    /// Show an artist and their top tracks
    Artist {
        /// Spotify artist ID
        id: String,
    },
    /// Search the catalogue
    Search {
        /// Search query
        query: String,

        /// Type of content to search
        #[arg(short, long, value_enum, default_value_t = SearchType::Track)]
        r#type: SearchType,

        /// Limit results
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Show audio features of a track
    Features {
        /// Spotify track ID
        id: String,
    },
    /// Show the current user's profile
    Me,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum SearchType {
    Track,
    Album,
    Artist,
    Playlist,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ApiConfig::default().with_base_url(cli.base_url.as_str());
    let api = SpotifyApi::with_config(config, Executors::current())?;
    api.set_access_token(cli.token.as_deref());

    let service = api.service();
    let market: Vec<(&str, &str)> = cli
        .market
        .as_deref()
        .map(|m| vec![("market", m)])
        .unwrap_or_default();

    match &cli.command {
        Commands::Album { id } => {
            let album = service.get_album(id, &market).await?;
            println!("{} - {}", album.artists_string(", "), album.name);
            if let Some(date) = album.release() {
                println!("   Released: {}", date.year);
            }
            for track in &album.tracks.items {
                println!(
                    "{:>3}. {} ({})",
                    track.track_number,
                    track.name,
                    track.duration_formatted()
                );
            }
        }
        Commands::Track { id } => {
            let track = service.get_track(id, &market).await?;
            println!(
                "{} - {} ({})",
                track.artists_string(", "),
                track.name,
                track.duration_formatted()
            );
            println!("   Album: {}", track.album.name);
            if let Some(isrc) = track.isrc() {
                println!("   ISRC: {}", isrc);
            }
        }
        Commands::Artist { id } => {
            let artist = service.get_artist(id).await?;
            println!("{} ({} followers)", artist.name, artist.follower_count());
            if !artist.genres.is_empty() {
                println!("   Genres: {}", artist.genres.join(", "));
            }

            let country = cli.market.as_deref().unwrap_or("US");
            let top = service.get_artist_top_track(id, country).await?;
            for (i, track) in top.tracks.iter().flatten().enumerate() {
                println!("{}. {}", i + 1, track.name);
            }
        }
        Commands::Search {
            query,
            r#type,
            limit,
        } => {
            let limit = limit.to_string();
            let mut options = market.clone();
            options.push(("limit", limit.as_str()));

            println!("Searching for '{}'...", query);
            match r#type {
                SearchType::Track => {
                    let results = service.search_tracks(query, &options).await?;
                    for (i, track) in results.tracks.items.iter().enumerate() {
                        println!(
                            "{}. {} - {} (ID: {})",
                            i + 1,
                            track.artists_string(", "),
                            track.name,
                            track.id.as_deref().unwrap_or("?")
                        );
                    }
                }
                SearchType::Album => {
                    let results = service.search_albums(query, &options).await?;
                    for (i, album) in results.albums.items.iter().enumerate() {
                        println!(
                            "{}. {} - {} (ID: {})",
                            i + 1,
                            album.artists_string(", "),
                            album.name,
                            album.id.as_deref().unwrap_or("?")
                        );
                    }
                }
                SearchType::Artist => {
                    let results = service.search_artists(query, &options).await?;
                    for (i, artist) in results.artists.items.iter().enumerate() {
                        println!("{}. {} (ID: {})", i + 1, artist.name, artist.id);
                    }
                }
                SearchType::Playlist => {
                    let results = service.search_playlists(query, &options).await?;
                    for (i, playlist) in results.playlists.items.iter().enumerate() {
                        println!("{}. {} (ID: {})", i + 1, playlist.name, playlist.id);
                    }
                }
            }
        }
        Commands::Features { id } => {
            let features = service.get_track_audio_features(id).await?;
            println!("Tempo: {:.1} BPM", features.tempo);
            let mode = if features.is_major() { "major" } else { "minor" };
            println!("Key: {} {}", features.key, mode);
            println!("Energy: {:.2}", features.energy);
            println!("Danceability: {:.2}", features.danceability);
            println!("Valence: {:.2}", features.valence);
        }
        Commands::Me => {
            let me = service.get_me().await?;
            println!("{} ({})", me.display_name.as_deref().unwrap_or(me.id.as_str()), me.id);
            if let Some(country) = &me.country {
                println!("   Country: {}", country);
            }
            println!("   Premium: {}", if me.is_premium() { "yes" } else { "no" });
        }
    }

    Ok(())
}
