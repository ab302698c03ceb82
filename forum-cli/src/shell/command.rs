//! Command parsing for the shell.

use forum_shared::types::{CommentSort, EntityRef, Registration, VoteAction};
use uuid::Uuid;

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Posts,
    Post(u64),
    Search(String),
    University(String),
    Sort(CommentSort),
    NewPost { title: String, content: String },
    EditPost { id: u64, title: String, content: String },
    DeletePost(u64),
    Comment { post_id: u64, content: String },
    DeleteComment(Uuid),
    Vote { target: EntityRef, action: VoteAction },
    Login { username: String, password: String },
    Register(Registration),
    Logout,
    WhoAmI,
    Universities,
    AdminDashboard,
    PostManagement(bool),
    Promote { user_id: u64, university: String },
    ModeratorDashboard,
    Ban(u64),
    Unban(u64),
}

impl Command {
    /// Parse a command line. Returns `None` for anything unrecognized so
    /// the shell can print its hint instead of guessing.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();

        match head.as_str() {
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),

            "posts" => Some(Self::Posts),
            "post" => Some(Self::Post(rest.first()?.parse().ok()?)),
            "search" => Some(Self::Search(rest.join(" "))),
            "uni" | "university" => {
                let name = rest.join(" ");
                (!name.is_empty()).then_some(Self::University(name))
            }
            "sort" => Some(Self::Sort(CommentSort::parse(rest.first()?)?)),

            "new" => {
                let joined = rest.join(" ");
                let (title, content) = joined.split_once('|')?;
                Some(Self::NewPost {
                    title: title.trim().to_string(),
                    content: content.trim().to_string(),
                })
            }
            "edit" => {
                let id = rest.first()?.parse().ok()?;
                let joined = rest[1..].join(" ");
                let (title, content) = joined.split_once('|')?;
                Some(Self::EditPost {
                    id,
                    title: title.trim().to_string(),
                    content: content.trim().to_string(),
                })
            }
            "comment" => {
                let post_id = rest.first()?.parse().ok()?;
                let content = rest[1..].join(" ");
                Some(Self::Comment { post_id, content })
            }
            "delete" => match *rest.first()? {
                "post" => Some(Self::DeletePost(rest.get(1)?.parse().ok()?)),
                "comment" => Some(Self::DeleteComment(rest.get(1)?.parse().ok()?)),
                _ => None,
            },

            "up" => parse_target(&rest).map(|target| Self::Vote {
                target,
                action: VoteAction::Up,
            }),
            "down" => parse_target(&rest).map(|target| Self::Vote {
                target,
                action: VoteAction::Down,
            }),

            "login" => Some(Self::Login {
                username: rest.first()?.to_string(),
                password: rest.get(1)?.to_string(),
            }),
            "register" => {
                // register <email> <full_name> <password> <university...>
                // Underscores in the name stand for spaces.
                if rest.len() < 4 {
                    return None;
                }
                let email = rest[0].to_string();
                let full_name = rest[1].replace('_', " ");
                let password = rest[2].to_string();
                let university = rest[3..].join(" ");
                Some(Self::Register(Registration {
                    email,
                    full_name,
                    confirm_password: password.clone(),
                    password,
                    university,
                    terms: Some(true),
                }))
            }
            "logout" => Some(Self::Logout),
            "me" | "whoami" => Some(Self::WhoAmI),

            "universities" => Some(Self::Universities),

            "admin" => Some(Self::AdminDashboard),
            "postman" => match *rest.first()? {
                "on" => Some(Self::PostManagement(true)),
                "off" => Some(Self::PostManagement(false)),
                _ => None,
            },
            "promote" => Some(Self::Promote {
                user_id: rest.first()?.parse().ok()?,
                university: {
                    let name = rest[1..].join(" ");
                    if name.is_empty() {
                        return None;
                    }
                    name
                },
            }),
            "mod" | "moderator" => Some(Self::ModeratorDashboard),
            "ban" => Some(Self::Ban(rest.first()?.parse().ok()?)),
            "unban" => Some(Self::Unban(rest.first()?.parse().ok()?)),

            _ => None,
        }
    }
}

fn parse_target(rest: &[&str]) -> Option<EntityRef> {
    match *rest.first()? {
        "post" | "p" => Some(EntityRef::Post(rest.get(1)?.parse().ok()?)),
        "comment" | "c" => Some(EntityRef::Comment(rest.get(1)?.parse().ok()?)),
        _ => None,
    }
}
