use crate::{
    bot::{connection::is_transport_error, platform::first_known},
    model::presence::Occupant,
};
use serenity::all::UserId;
use songbird::events::context_data::DisconnectReason;
use test_utils::serenity::create_test_user;
