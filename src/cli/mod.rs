use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message and print the reply
    Ask {
        message: String,

        /// Continue the conversation that produced this response id
        #[arg(short, long)]
        previous_response_id: Option<String>,
    },

    /// Interactive session; each line is one turn, `/exit` or EOF ends it
    Chat,

    /// Print the message sequence that would be sent for MESSAGE
    Compose {
        message: String,
    },
}
