use promptconvert::client::services::convert_service::ConvertService;
use promptconvert::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ClientConfig::from_env();
    println!("Using endpoint {}/api/convert", cfg.server_url);

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.trim().is_empty() {
        "Summarize customer emails into action items".to_string()
    } else {
        prompt
    };

    let svc = ConvertService::new(&cfg)?;
    println!("PROMPT -> {}", prompt);
    match svc.convert(&prompt).await {
        Ok(system_prompt) => println!("SYSTEM PROMPT ->\n{}", system_prompt),
        Err(e) => println!("FAILED -> {} ({})", e.user_message(), e),
    }

    Ok(())
}
