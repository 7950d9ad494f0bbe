mod casino;
mod championship;
mod import;
mod matches;
mod mix;
mod news;
mod payment;
mod ranking;
mod user;
