// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.

error_chain! {

    foreign_links {
        DocOptFailure(::docopt::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("a maze needs at least one row and one column, got {} x {}", rows, columns)
        }
        UnknownBody {
            description("body is not part of the physics world")
            display("body is not part of the physics world")
        }
        FrontendUnavailable {
            description("interactive frontend unavailable")
            display("built without the `sdl` feature, the interactive game is unavailable")
        }
    }
}
