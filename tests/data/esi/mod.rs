mod get_character;
mod get_killmail;
mod resolve_ids;
mod resolve_names;
