mod faction;
mod user;
