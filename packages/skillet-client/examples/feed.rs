//! Basic Skillet client usage example

use skillet_client::SkilletClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = SkilletClient::from_env()?;

    // Browse the feed
    println!("=== Posts ===");
    let posts = client.all_posts().await?;
    for post in posts.iter().take(10) {
        let author = post
            .created_by
            .as_ref()
            .and_then(|user| user.name.as_deref())
            .unwrap_or("unknown");
        println!("{} by {} ({} likes)", post.title, author, post.like_count.unwrap_or(0));
    }

    // Media on the first post
    if let Some(post) = posts.first() {
        println!("\n=== Media for '{}' ===", post.title);
        for media in client.media_by_post(&post.id).await? {
            println!("{}: {}", media.kind, media.url);
        }

        println!("\n=== Comments ===");
        for comment in client.comments_by_post(&post.id).await? {
            let who = comment
                .commented_by
                .as_ref()
                .and_then(|user| user.name.as_deref())
                .unwrap_or("unknown");
            println!("{}: {}", who, comment.comment);
        }
    }

    Ok(())
}
