//! Drive the authoring workflow against the in-memory backends.

use std::time::Duration;

use authoring::testing::{image_file, video_file, MockUploader, RecordingStore};
use authoring::{AuthoringSession, FixedIdentity, StaticProbe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordingStore::new();
    let uploader = MockUploader::new();
    let probe = StaticProbe::new().with_duration("plating.mp4", Duration::from_secs(24));
    let identity = FixedIdentity::user("chef-1");

    let mut session = AuthoringSession::new(store.clone(), uploader, probe, identity);

    // Compose a post
    println!("=== Compose ===");
    session.set_title("Miso-butter roast chicken");
    session.set_description("Dry-brine overnight, then roast hot and fast.");
    session
        .select_media(vec![image_file("bird.jpg"), video_file("plating.mp4")])
        .await?;

    for item in session.media().items() {
        println!("attached: {} ({})", item.display_url(), item.kind());
    }

    // Submit it
    println!("\n=== Submit ===");
    let report = session.submit().await?;
    println!("{}", report.summary());
    println!("post id: {}", report.post.id);
    for media in &report.created_media {
        println!("stored: {} -> {}", media.id, media.url);
    }

    // Edit the same post: drop the video
    println!("\n=== Edit ===");
    let mut session = AuthoringSession::edit(
        store.clone(),
        MockUploader::new(),
        StaticProbe::new(),
        FixedIdentity::user("chef-1"),
        &report.post.id,
    )
    .await?;

    let video = session
        .media()
        .items()
        .iter()
        .find(|m| m.kind().is_video())
        .map(|m| m.local_id());
    if let Some(id) = video {
        session.remove_media(id);
    }
    session.set_description("Dry-brine overnight, roast at 220C.");

    let report = session.submit().await?;
    println!("{}", report.summary());
    println!(
        "store now holds {} post(s), {} media record(s)",
        store.data().post_count(),
        store.data().media_count()
    );

    Ok(())
}
