pub mod a001_agenda;
pub mod a002_news;
pub mod a003_registered_user;
