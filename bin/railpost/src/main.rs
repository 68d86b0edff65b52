//! # Railpost Binary
//!
//! Assembles the platform: simulated login, a seeded in-memory store, and
//! a minimal line-oriented loop standing in for the visual feed. State
//! lives for the process lifetime only.

use anyhow::Result;
use rp_auth_simple::{Session, SimpleAuthProvider};
use rp_core::models::Publication;
use rp_core::traits::AuthProvider;
use rp_store::PublicationStore;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration: the login delay is the only knob.
    let delay_ms = std::env::var("RAILPOST_LOGIN_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(1000);
    let auth = SimpleAuthProvider::new(Duration::from_millis(delay_ms));

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    // 2. Sign in. No credential check happens; the pair is echoed back
    //    after the simulated delay.
    let mut session = Session::new();
    loop {
        let username = prompt(&mut input, "username (blank to derive from email): ")?;
        let email = prompt(&mut input, "email: ")?;
        let (Some(username), Some(email)) = (username, email) else {
            return Ok(()); // stdin closed before login
        };
        match auth.authenticate(&username, &email).await {
            Ok(user) => {
                println!("welcome, {}!", user.username);
                session.login(user);
                break;
            }
            Err(err) => println!("login failed: {err}"),
        }
    }

    // 3. The store starts from the sample feed.
    let mut store = PublicationStore::seeded();
    tracing::info!(publications = store.len(), "store seeded");

    // 4. Command loop.
    println!("type 'help' for commands");
    while let Some(line) = prompt(&mut input, "> ")? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let username = match session.current() {
            Some(user) => user.username.clone(),
            None => break, // logged out
        };

        let outcome = match command {
            "" => Ok(()),
            "help" => {
                print_help();
                Ok(())
            }
            "feed" => {
                print_publications(&store.feed());
                Ok(())
            }
            "favorites" => {
                print_publications(&store.favorites());
                Ok(())
            }
            "mine" => {
                let mine = store.by_author(&username);
                println!("{} publication(s), {} comment(s) platform-wide", mine.len(),
                    store.total_comments());
                print_publications(&mine);
                Ok(())
            }
            "search" => {
                let matches = store.search(rest.trim());
                println!("{} result(s)", matches.len());
                print_publications(&matches);
                Ok(())
            }
            "new" => match parse_fields(rest) {
                [Some(title), Some(content), image] => store
                    .create(&username, title, content, image)
                    .map(|p| println!("published #{}", p.id)),
                _ => {
                    println!("usage: new <title> | <content> [| <image url>]");
                    Ok(())
                }
            },
            "edit" => match rest.split_once(' ').map(|(id, f)| (id.parse::<u64>(), parse_fields(f))) {
                Some((Ok(id), [Some(title), Some(content), image])) => store
                    .edit(id, &username, title, content, image)
                    .map(|p| println!("updated #{}", p.id)),
                _ => {
                    println!("usage: edit <id> <title> | <content> [| <image url>]");
                    Ok(())
                }
            },
            "comment" => match rest.split_once(' ').map(|(id, text)| (id.parse::<u64>(), text)) {
                Some((Ok(id), text)) => store
                    .add_comment(id, &username, text)
                    .map(|c| println!("comment #{} added", c.id)),
                _ => {
                    println!("usage: comment <id> <text>");
                    Ok(())
                }
            },
            "fav" => match rest.trim().parse::<u64>() {
                Ok(id) => store
                    .toggle_favorite(id)
                    .map(|on| println!("#{id} {}", if on { "starred" } else { "unstarred" })),
                Err(_) => {
                    println!("usage: fav <id>");
                    Ok(())
                }
            },
            "delete" => match rest.trim().parse::<u64>() {
                Ok(id) => store.delete(id, &username).map(|_| println!("#{id} deleted")),
                Err(_) => {
                    println!("usage: delete <id>");
                    Ok(())
                }
            },
            "json" => {
                println!("{}", serde_json::to_string_pretty(&store.feed())?);
                Ok(())
            }
            "logout" | "quit" => {
                session.logout();
                break;
            }
            other => {
                println!("unknown command '{other}', try 'help'");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("error: {err}");
        }
    }

    println!("goodbye");
    Ok(())
}

/// Writes `label`, flushes, and reads one line. `None` means stdin closed.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Splits "title | content | image" into up to three trimmed fields.
fn parse_fields(raw: &str) -> [Option<&str>; 3] {
    let mut parts = raw.splitn(3, '|').map(str::trim);
    [parts.next(), parts.next(), parts.next()]
}

fn print_publications(publications: &[&Publication]) {
    for p in publications {
        let star = if p.is_favorite { "*" } else { " " };
        println!(
            "{star}#{} [{}] {} by {}",
            p.id,
            p.timestamp.format("%Y-%m-%d"),
            p.title,
            p.author
        );
        println!("    {}", p.content);
        if let Some(url) = &p.image {
            println!("    image: {url}");
        }
        for c in &p.comments {
            println!("    > {}: {}", c.author, c.content);
        }
    }
}

fn print_help() {
    println!("  feed                         show the feed, newest first");
    println!("  favorites                    show starred publications");
    println!("  mine                         show your own publications");
    println!("  search <query>               search title, content, author");
    println!("  new <title> | <body> [| url] publish");
    println!("  edit <id> <title> | <body>   edit your publication");
    println!("  comment <id> <text>          comment on a publication");
    println!("  fav <id>                     toggle favorite");
    println!("  delete <id>                  delete your publication");
    println!("  json                         dump the feed as JSON");
    println!("  quit                         log out and exit");
}
