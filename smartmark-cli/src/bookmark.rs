use std::io::{self, Write};

use clap::Subcommand;
use colored::Colorize;
use smartmark_lib::{BookmarkId, Controller, Field, Service, Session};

use crate::Failure;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List bookmarks
    List,
    /// Add a new bookmark
    Add { title: String, url: String },
    /// Change the title and/or URL of a bookmark
    Edit {
        id: BookmarkId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Delete a bookmark
    Remove { id: BookmarkId },
}

pub async fn handle<S: Service>(
    controller: &mut Controller<S>,
    cmd: &Command,
) -> Result<(), Failure> {
    match cmd {
        Command::List => {
            controller.refresh().await?;
            write_list(&mut io::stdout().lock(), controller.session())?;
        }
        Command::Add { title, url } => {
            controller.update_field(Field::Title, title.as_str());
            controller.update_field(Field::Url, url.as_str());
            controller.submit().await?;
            println!("{}", "Bookmark added".green());
        }
        Command::Edit { id, title, url } => {
            controller.refresh().await?;

            let bookmark = controller
                .session()
                .bookmarks()
                .iter()
                .find(|b| b.id == *id)
                .cloned()
                .ok_or_else(|| Failure::UnknownId(id.clone()))?;

            controller.start_edit(&bookmark);
            if let Some(title) = title {
                controller.update_field(Field::Title, title.as_str());
            }
            if let Some(url) = url {
                controller.update_field(Field::Url, url.as_str());
            }
            controller.submit().await?;
            println!("{}", "Bookmark updated".green());
        }
        Command::Remove { id } => {
            controller.remove(id).await?;
            println!("{}", "Bookmark deleted".green());
        }
    }

    Ok(())
}

fn write_list(out: &mut impl Write, session: &Session) -> io::Result<()> {
    if session.bookmarks().is_empty() {
        return writeln!(out, "No bookmarks yet. Add your first one.");
    }

    for bookmark in session.bookmarks() {
        writeln!(
            out,
            "* [{}] {} <{}>",
            bookmark.id.to_string().dimmed(),
            bookmark.title.bold(),
            bookmark.url.cyan()
        )?;
    }

    Ok(())
}
