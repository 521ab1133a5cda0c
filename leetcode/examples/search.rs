use std::{env, error::Error};

use leetcode::{LeetCodeClient, LeetCodeConfig};

/// Prints the problems matching the first argument, e.g.
/// `cargo run -p leetcode --example search -- "two sum"`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let search = env::args().nth(1).ok_or("usage: search <keyword>")?;
    let config = match env::var("LEETCODE_ENDPOINT") {
        Ok(endpoint) => LeetCodeConfig::with_endpoint(endpoint),
        Err(_) => LeetCodeConfig::default(),
    };

    let client = LeetCodeClient::new(config);
    let problems = client.search_problems(&search).await?;

    for (i, problem) in problems.iter().enumerate() {
        println!(
            "{}: {} [{}] ({}) {}",
            i,
            problem.title,
            problem.difficulty,
            problem.title_slug,
            problem.tags.join(", ")
        );
    }

    Ok(())
}
