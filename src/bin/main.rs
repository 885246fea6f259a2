use anyhow::{Context, Error};
use gallery_remote::{Dialect, Gallery};
use serde::Serialize;
use std::path::PathBuf;
use structopt::StructOpt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::from_args();

    log::debug!("Connecting to {} ({})", args.url, args.gallery_version);

    let mut gallery = Gallery::new(&args.url, args.gallery_version)?;

    match (&args.username, &args.password) {
        (Some(username), Some(password)) => {
            gallery
                .login(username, password)
                .await
                .context("Unable to log in")?;
        },
        (Some(_), None) => anyhow::bail!("A username needs a password"),
        _ => log::debug!("Continuing anonymously"),
    }

    match args.cmd {
        Cmd::Albums { prune } => {
            let albums = if prune {
                gallery.fetch_albums_prune().await?
            } else {
                gallery.fetch_albums().await?
            };
            print_json(&albums)?;
        },
        Cmd::Images { album } => {
            let images = gallery.fetch_album_images(&album).await?;
            print_json(&images)?;
        },
        Cmd::Upload {
            album,
            file,
            caption,
            description,
        } => {
            // the server labels the item with its caption, so default to
            // the file's name
            let caption = caption.unwrap_or_else(|| {
                file.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
            gallery
                .add_item(&album, &file, &caption, &description)
                .await
                .with_context(|| format!("Unable to upload {}", file.display()))?;
        },
        Cmd::NewAlbum {
            parent,
            name,
            title,
            description,
        } => {
            let album = gallery
                .new_album(
                    &parent,
                    name.as_deref(),
                    title.as_deref(),
                    description.as_deref(),
                )
                .await?;
            println!("{}", album);
        },
        Cmd::AlbumProperties { album } => {
            print_json(&gallery.album_properties(&album).await?)?;
        },
        Cmd::ImageProperties { image } => {
            print_json(&gallery.image_properties(&image).await?)?;
        },
        Cmd::FetchImage {
            image,
            full,
            output,
        } => {
            let data = gallery.fetch_image(&image, !full).await?;
            tokio::fs::write(&output, &data).await.with_context(|| {
                format!("Unable to save the image to {}", output.display())
            })?;
            log::info!("Saved {} bytes to {}", data.len(), output.display());
        },
    }

    Ok(())
}

fn print_json<S: Serialize>(value: &S) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Debug, StructOpt)]
struct Args {
    #[structopt(
        long = "url",
        help = "The gallery's base address (e.g. http://example.com/gallery2)"
    )]
    url: String,
    #[structopt(
        short = "g",
        long = "gallery-version",
        default_value = "2",
        help = "The major version of Gallery running on the server (1 or 2)"
    )]
    gallery_version: Dialect,
    #[structopt(short = "u", long = "username", help = "Your username")]
    username: Option<String>,
    #[structopt(short = "p", long = "password", help = "Your password")]
    password: Option<String>,
    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    #[structopt(about = "List the gallery's albums")]
    Albums {
        #[structopt(
            long = "prune",
            help = "Only show albums you can add pictures to"
        )]
        prune: bool,
    },
    #[structopt(about = "List the images in an album")]
    Images { album: String },
    #[structopt(about = "Upload a picture to an album")]
    Upload {
        album: String,
        #[structopt(parse(from_os_str))]
        file: PathBuf,
        #[structopt(long = "caption")]
        caption: Option<String>,
        #[structopt(long = "description", default_value = "")]
        description: String,
    },
    #[structopt(about = "Create a new album")]
    NewAlbum {
        parent: String,
        #[structopt(long = "name")]
        name: Option<String>,
        #[structopt(long = "title")]
        title: Option<String>,
        #[structopt(long = "description")]
        description: Option<String>,
    },
    #[structopt(about = "Show an album's properties")]
    AlbumProperties { album: String },
    #[structopt(about = "Show an image's properties (Gallery 2 only)")]
    ImageProperties { image: String },
    #[structopt(about = "Download an image (Gallery 2 only)")]
    FetchImage {
        image: String,
        #[structopt(
            long = "full",
            help = "Download the full image instead of its thumbnail"
        )]
        full: bool,
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output: PathBuf,
    },
}
