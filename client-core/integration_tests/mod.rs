mod auth_flow;
mod helpers;
mod send;
