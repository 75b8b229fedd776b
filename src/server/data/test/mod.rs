mod question;
mod user;
