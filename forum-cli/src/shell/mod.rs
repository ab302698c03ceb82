//! Interactive shell: parses commands and drives the forum client.
//!
//! Every command runs to completion before the next line is read; failures
//! print an inline message and return to the prompt. Nothing here exits
//! the process except `quit`.

mod command;

pub use command::Command;

use std::io::Write;

use forum_session::errors::ClientError;
use forum_session::{ForumClient, VoteOutcome};
use forum_shared::types::{CommentSort, EntityRef, NewPost, VoteAction};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::errors::AppError;
use crate::render;

pub struct Shell {
    forum: ForumClient,
    sort: CommentSort,
}

impl Shell {
    pub fn new(forum: ForumClient) -> Self {
        Self {
            forum,
            sort: CommentSort::default(),
        }
    }

    /// Read commands from stdin until EOF or `quit`.
    pub async fn run(&mut self) -> Result<(), AppError> {
        println!("Gurugolpo - type `help` for commands.");
        if let Some(user) = self.forum.session().current_user() {
            println!("signed in as {}", user.display_name());
        }

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Command::parse(line) {
                Some(Command::Quit) => break,
                Some(command) => self.execute(command).await,
                None => println!("Unrecognized command. Type `help` for the list."),
            }
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::Help => print_help(),
            Command::Quit => {}

            Command::Posts => match self.forum.posts().await {
                Ok(posts) => print_posts(&posts),
                Err(error) => println!("{}", error),
            },
            Command::Post(id) => self.show_post(id).await,
            Command::Search(query) => match self.forum.search(&query).await {
                Ok(Some(posts)) => print_posts(&posts),
                Ok(None) => {}
                Err(error) => println!("{}", error),
            },
            Command::University(name) => match self.forum.posts_by_university(&name).await {
                Ok(posts) => print_posts(&posts),
                Err(error) => println!("{}", error),
            },
            Command::Sort(sort) => {
                self.sort = sort;
                println!("comment sort set to {:?}", sort);
            }

            Command::NewPost { title, content } => {
                let draft = NewPost {
                    title,
                    content,
                    university: self
                        .forum
                        .session()
                        .current_user()
                        .and_then(|user| user.university.clone()),
                };
                match self.forum.create_post(&draft).await {
                    Ok(post) => println!("created {}", render::post_summary(&post)),
                    Err(error) => println!("{}", error),
                }
            }
            Command::EditPost { id, title, content } => {
                let draft = NewPost {
                    title,
                    content,
                    university: None,
                };
                match self.forum.update_post(id, &draft).await {
                    Ok(post) => println!("updated {}", render::post_summary(&post)),
                    Err(error) => println!("{}", error),
                }
            }
            Command::DeletePost(id) => match self.forum.delete_post(id).await {
                Ok(()) => println!("post {} deleted", id),
                Err(error) => println!("{}", error),
            },
            Command::Comment { post_id, content } => {
                match self.forum.submit_comment(post_id, &content).await {
                    Ok(comment) => println!("posted: {}", render::comment_line(&comment)),
                    Err(error) => println!("{}", error),
                }
            }
            Command::DeleteComment(id) => match self.forum.delete_comment(id).await {
                Ok(()) => println!("comment {} deleted", id),
                Err(error) => println!("{}", error),
            },

            Command::Vote { target, action } => self.vote(target, action).await,

            Command::Login { username, password } => {
                match self.forum.login(&username, &password).await {
                    Ok(Some(user)) => println!("signed in as {}", user.display_name()),
                    Ok(None) => println!("signed in"),
                    Err(error) => println!("{}", error),
                }
            }
            Command::Register(registration) => match self.forum.register(&registration).await {
                Ok(message) => println!("{}", message),
                Err(error) => println!("{}", error),
            },
            Command::Logout => match self.forum.logout() {
                Ok(()) => println!("signed out"),
                Err(error) => println!("{}", error),
            },
            Command::WhoAmI => match self.forum.session().current_user() {
                Some(user) => println!("{}", render::user_line(user)),
                None => println!("not signed in"),
            },

            Command::Universities => match self.forum.universities().await {
                Ok(universities) => {
                    for university in &universities {
                        println!("{}", render::university_line(university));
                    }
                }
                Err(error) => println!("{}", error),
            },

            Command::AdminDashboard => match self.forum.admin_dashboard().await {
                Ok(dashboard) => println!("{}", render::admin_dashboard(&dashboard)),
                Err(error) => println!("{}", error),
            },
            Command::PostManagement(enabled) => {
                match self.forum.set_post_management(enabled).await {
                    Ok(message) => println!("{}", message),
                    Err(error) => println!("{}", error),
                }
            }
            Command::Promote {
                user_id,
                university,
            } => match self.forum.promote_user(user_id, &university).await {
                Ok(message) => println!("{}", message),
                Err(error) => println!("{}", error),
            },
            Command::ModeratorDashboard => match self.forum.moderator_dashboard().await {
                Ok(dashboard) => println!("{}", render::moderator_dashboard(&dashboard)),
                Err(error) => println!("{}", error),
            },
            Command::Ban(user_id) => match self.forum.ban_user(user_id).await {
                Ok(message) => println!("{}", message),
                Err(error) => println!("{}", error),
            },
            Command::Unban(user_id) => match self.forum.unban_user(user_id).await {
                Ok(message) => println!("{}", message),
                Err(error) => println!("{}", error),
            },
        }
    }

    async fn show_post(&self, id: u64) {
        match self.forum.post(id).await {
            Ok(post) => {
                println!("{}", render::post_detail(&post));

                // The count endpoint is authoritative; the post payload may
                // lag behind it.
                let target = EntityRef::Post(id);
                if let Some(counts) = self.forum.refresh_counts(target).await {
                    println!(
                        "{}",
                        render::vote_line(self.forum.vote_direction(target), &counts)
                    );
                }

                match self.forum.comments(id, self.sort).await {
                    Ok(comments) if comments.is_empty() => {
                        println!("\nNo comments yet. Be the first to comment!");
                    }
                    Ok(comments) => {
                        println!("\nComments ({}, {:?}):", comments.len(), self.sort);
                        for comment in &comments {
                            println!("{}", render::comment_line(comment));
                        }
                    }
                    Err(error) => println!("{}", error),
                }
            }
            Err(error) => println!("{}", error),
        }
    }

    async fn vote(&self, target: EntityRef, action: VoteAction) {
        match self.forum.vote(target, action).await {
            VoteOutcome::AuthRequired => {
                println!("{}", ClientError::AuthRequired);
            }
            VoteOutcome::InFlight => {}
            VoteOutcome::Recorded { direction, counts } => {
                println!("{}", render::vote_line(direction, &counts));
            }
            VoteOutcome::Failed => {}
        }
    }
}

fn print_posts(posts: &[forum_shared::types::Post]) {
    if posts.is_empty() {
        println!("no posts found");
        return;
    }
    for post in posts {
        println!("{}", render::post_summary(post));
    }
}

fn print_help() {
    println!(
        "\
posts                          list all posts
post <id>                      show a post with its comments
search <query>                 search posts (debounced)
uni <university>               posts from one university
sort <newest|oldest|most_voted> set comment ordering
new <title> | <content>        create a post
edit <id> <title> | <content>  edit a post
comment <post-id> <text>       comment on a post
up|down post <id>              vote on a post
up|down comment <uuid>         vote on a comment
delete post <id>               delete a post
delete comment <uuid>          delete a comment
login <username> <password>    sign in
register <email> <full name> <password> <university>
logout / me                    sign out / show profile
universities                   list universities
admin                          admin dashboard
postman <on|off>               toggle post management (admin)
promote <user-id> <university> promote to moderator (admin)
mod                            moderator dashboard
ban <user-id> / unban <user-id>
quit"
    );
}
