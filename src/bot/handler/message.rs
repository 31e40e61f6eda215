use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{model::command::Command, scheduler::dispatcher::DispatcherHandle};

/// Handle message creation in a channel
///
/// Messages from bots and anything that is not an exact command are ignored.
/// Commands run on the dispatcher so they are ordered with routing work; the
/// reply goes back to the message's channel.
pub async fn handle_message(dispatcher: &DispatcherHandle, ctx: Context, message: Message) {
    let Some(command) = command_for(&message) else {
        return;
    };

    tracing::debug!("Received {:?} from {}", command, message.author.name);

    let Some(reply) = dispatcher.command(command).await else {
        tracing::warn!("Dispatcher stopped before answering {:?}", command);
        return;
    };

    if let Err(e) = message.reply(&ctx, reply.to_string()).await {
        tracing::error!("Failed to reply to {:?}: {:?}", command, e);
    }
}

/// Command carried by a message, if it comes from a human and matches exactly.
pub fn command_for(message: &Message) -> Option<Command> {
    if message.author.bot {
        return None;
    }

    Command::parse(&message.content)
}
