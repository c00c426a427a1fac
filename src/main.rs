use clap::{Parser, Subcommand};
use rift_client::{
    AccountApi, Config, DataDragon, MatchApi, MatchListOptions, RiftResult, RiotClient,
    SummonerApi, logging,
};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "rift-client")]
#[command(about = "Query the Riot Games API and Data Dragon", long_about = None)]
struct Args {
    /// Platform code (NA1, EUW1, KR...), defaults to RIOT_REGION
    #[arg(short, long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look an account up by Riot ID ("Name#TAG", or "Name" with --tag)
    Account {
        riot_id: String,
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Fetch the summoner profile of a puuid
    Summoner { puuid: String },
    /// List match ids of a puuid
    Matches {
        puuid: String,
        #[arg(long)]
        start: Option<u32>,
        #[arg(short, long)]
        count: Option<u32>,
        #[arg(short, long)]
        queue: Option<u32>,
        /// ranked, normal, tourney or tutorial
        #[arg(long = "type")]
        match_type: Option<String>,
    },
    /// Fetch the details of a match
    Match { match_id: String },
    /// Fetch the Data Dragon champion dataset
    Champions,
    /// Fetch the Data Dragon item dataset
    Items,
}

#[tokio::main]
async fn main() {
    logging::init();
    let args = Args::parse();

    match render(run(args).await) {
        Ok(json) => println!("{}", json),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

/// Pretty JSON for stdout, or the message to print on stderr.
fn render(result: RiftResult<Value>) -> Result<String, String> {
    let value = result.map_err(|e| {
        tracing::debug!("command failed: {:?}", e);
        e.to_string()
    })?;
    serde_json::to_string_pretty(&value).map_err(|e| format!("cannot print response: {}", e))
}

async fn run(args: Args) -> RiftResult<Value> {
    let config = Config::from_env();
    let region = args.region.as_deref();

    match args.command {
        Command::Champions => DataDragon::from_config(&config)?.get_champions().await,
        Command::Items => DataDragon::from_config(&config)?.get_items().await,
        Command::Account { riot_id, tag } => {
            let client = RiotClient::new(&config)?;
            let account = client
                .get_account_by_riot_id(&riot_id, tag.as_deref(), region)
                .await?;
            Ok(serde_json::json!({
                "puuid": account.puuid,
                "gameName": account.game_name,
                "tagLine": account.tag_line,
            }))
        }
        Command::Summoner { puuid } => {
            RiotClient::new(&config)?
                .get_summoner_by_puuid(&puuid, region)
                .await
        }
        Command::Matches {
            puuid,
            start,
            count,
            queue,
            match_type,
        } => {
            let options = MatchListOptions {
                start,
                count,
                queue,
                match_type,
                ..Default::default()
            };
            let ids = RiotClient::new(&config)?
                .list_match_ids(&puuid, &options, region)
                .await?;
            Ok(Value::from(ids))
        }
        Command::Match { match_id } => {
            RiotClient::new(&config)?
                .get_match_detail(&match_id, region)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rift_client::RiftError;

    #[test]
    fn success_is_rendered_as_pretty_json() {
        let out = render(Ok(serde_json::json!({"puuid": "p"}))).unwrap();

        assert_eq!(out, "{\n  \"puuid\": \"p\"\n}");
    }

    #[test]
    fn failure_is_rendered_as_the_error_message() {
        let err = render(Err(RiftError::UpstreamStatus {
            status: 404,
            message: "Data not found".into(),
        }))
        .unwrap_err();

        assert_eq!(err, "API error 404: Data not found");
    }
}
