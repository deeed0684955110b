//! Terminal space-garbage runner (default binary).
//!
//! Launch options come from the environment, see [`space_garbage::LaunchOptions`].

fn main() -> anyhow::Result<()> {
    space_garbage::run()
}
