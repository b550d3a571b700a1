//! One-shot post commands against a running grapevine server
//!
//! ```bash
//! grapevine posts list --output json | jq '.[].name'
//! grapevine posts create --name "Jake Peralta" --body "cool cool cool"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use grapevine_core::{Post, PostId, PostInput};

use crate::client::{PostsApi, PostsClient};
use crate::config::GrapevineConfig;

// ============================================================================
// Args
// ============================================================================

#[derive(Parser, Debug)]
pub struct PostsArgs {
    /// API endpoint (default: http://127.0.0.1:3000)
    #[arg(long, env = "GRAPEVINE_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: PostsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommands {
    /// List every post, oldest first
    List,
    /// Show one post
    Get {
        /// Post ID
        id: PostId,
    },
    /// Create a post
    Create(CreateArgs),
    /// Replace a post's fields (omitted fields keep their current value)
    Update(UpdateArgs),
    /// Delete a post
    Delete {
        /// Post ID
        id: PostId,
    },
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Who said it
    #[arg(long, default_value = "")]
    pub name: String,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// What they said
    #[arg(long, default_value = "")]
    pub body: String,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Post ID
    pub id: PostId,

    /// Who said it
    #[arg(long)]
    pub name: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// What they said
    #[arg(long)]
    pub body: Option<String>,
}

impl UpdateArgs {
    /// Overlay the given flags on the post's current fields
    fn merge(self, current: Post) -> PostInput {
        PostInput {
            name: self.name.unwrap_or(current.name),
            image: self.image.unwrap_or(current.image),
            body: self.body.unwrap_or(current.body),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

// ============================================================================
// Dispatch
// ============================================================================

pub async fn run_posts(args: PostsArgs, config: &GrapevineConfig) -> Result<()> {
    let endpoint = config.endpoint(args.endpoint);
    let client = PostsClient::new(endpoint.as_str()).context("Failed to build HTTP client")?;
    let format = args.output;

    match args.command {
        PostsCommands::List => {
            let posts = client
                .list()
                .await
                .with_context(|| format!("Failed to list posts from {}", endpoint))?;
            print_posts(&posts, format)
        }
        PostsCommands::Get { id } => {
            let post = client.get(id).await.context("Failed to fetch post")?;
            print_post(&post, format)
        }
        PostsCommands::Create(create) => {
            let input = PostInput::new(create.name, create.image, create.body);
            let post = client.create(&input).await.context("Failed to create post")?;
            print_post(&post, format)
        }
        PostsCommands::Update(update) => {
            let id = update.id;
            let current = client.get(id).await.context("Failed to fetch post")?;
            let input = update.merge(current);
            let post = client
                .update(id, &input)
                .await
                .context("Failed to update post")?;
            print_post(&post, format)
        }
        PostsCommands::Delete { id } => {
            let deleted = client.delete(id).await.context("Failed to delete post")?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "id": id, "deleted": deleted }))
                }
                OutputFormat::Human => println!("deleted post #{}", id),
            }
            Ok(())
        }
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_posts(posts: &[Post], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(posts)?),
        OutputFormat::Human => print!("{}", render_feed(posts)),
    }
    Ok(())
}

fn print_post(post: &Post, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(post)?),
        OutputFormat::Human => print!("{}", render_feed(std::slice::from_ref(post))),
    }
    Ok(())
}

/// Tree-style listing, one block per post
fn render_feed(posts: &[Post]) -> String {
    let mut out = String::new();
    out.push_str(&format!("┌─ i heard that... ({})\n│\n", posts.len()));

    if posts.is_empty() {
        out.push_str("└─ (no posts)\n");
        return out;
    }

    for (i, post) in posts.iter().enumerate() {
        let is_last = i == posts.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let cont_prefix = if is_last { "   " } else { "│  " };

        out.push_str(&format!("{} #{} {} said...\n", prefix, post.id, post.name));
        out.push_str(&format!("{}{}\n", cont_prefix, post.body));
        if !post.image.is_empty() {
            out.push_str(&format!("{}image: {}\n", cont_prefix, post.image));
        }
        if !is_last {
            out.push_str("│\n");
        }
    }

    out
}
