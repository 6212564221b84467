/*!
# Commands
*/

#[path = "statements/files.rs"]
#[allow(non_snake_case)]
pub mod FILES;

#[path = "statements/help.rs"]
#[allow(non_snake_case)]
pub mod HELP;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/new.rs"]
#[allow(non_snake_case)]
pub mod NEW;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;
