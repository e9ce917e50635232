use crate::app::{AppContext, HeraldError, Result};
use crate::domain::{FeedEntry, ListEntry};
use crate::notify::Notifier;
use crate::reconcile;
use crate::scrape::{feed, list};

/// The scheduled entry point: authenticate, scrape both surfaces,
/// intersect, notify. Any failure along the way aborts the run with no
/// notification sent.
pub async fn check(ctx: &AppContext, dry_run: bool) -> Result<()> {
    if !ctx.session.ensure_authenticated().await? {
        return Err(HeraldError::Auth(format!(
            "could not log in as {}",
            ctx.config.username
        )));
    }

    let my_list = fetch_list(ctx).await?;
    println!("you have {} series on your list", my_list.len());

    let releases = fetch_feed(ctx).await?;
    println!("release feed has {} items", releases.len());

    let updates = reconcile::compute_updates(&my_list, &releases);
    if updates.is_empty() {
        println!("no new updates");
        return Ok(());
    }

    let digest = reconcile::render_digest(&updates);
    if dry_run {
        print!("{digest}");
        return Ok(());
    }

    ctx.notifier.send(&ctx.config.device, &digest).await?;
    println!("notification sent ({} updates)", updates.len());

    Ok(())
}

pub async fn login(ctx: &AppContext) -> Result<()> {
    if ctx.session.login().await? {
        println!("login successful, cookies saved");
        Ok(())
    } else {
        Err(HeraldError::Auth(format!(
            "could not log in as {}",
            ctx.config.username
        )))
    }
}

pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    if !ctx.session.ensure_authenticated().await? {
        return Err(HeraldError::Auth(format!(
            "could not log in as {}",
            ctx.config.username
        )));
    }

    let my_list = fetch_list(ctx).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&my_list)?);
        return Ok(());
    }

    for entry in &my_list {
        println!("{}\n  {}", entry.title, entry.link);
    }
    println!("{} series", my_list.len());

    Ok(())
}

pub async fn feed(ctx: &AppContext, json: bool) -> Result<()> {
    let releases = fetch_feed(ctx).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&releases)?);
        return Ok(());
    }

    for entry in &releases {
        println!(
            "{} | {} {} | {}",
            entry.date, entry.title, entry.chapter, entry.link
        );
    }
    println!("{} items", releases.len());

    Ok(())
}

async fn fetch_list(ctx: &AppContext) -> Result<Vec<ListEntry>> {
    let body = ctx.session.get_page(ctx.config.list_url()).await?;
    list::parse_list(&body)
}

/// The feed is a public surface; it goes through the plain client, outside
/// the authenticated session.
async fn fetch_feed(ctx: &AppContext) -> Result<Vec<FeedEntry>> {
    let response = ctx
        .http
        .get(ctx.config.feed_url())
        .send()
        .await?
        .error_for_status()?;
    let body = response.bytes().await?;
    feed::parse_feed(&body)
}
