use std::path::Path;
use monkey::config::{self, MonkeyConfig};
use monkey::output::{emit_success, error_envelope, OutputMode};
use monkey::ui::{self, Icons};
use monkey::{Access, EntryFields, Error, Profile, RelationshipService, SqliteStore};

pub fn run_init(
    output_mode: OutputMode,
    config_path: &Path,
    database: &Path,
    admin: &monkey::AdminCredentials,
    force: bool,
) -> anyhow::Result<()> {
    let config = MonkeyConfig {
        database: Some(database.display().to_string()),
        admin: admin.clone(),
    };
    config::write_config(config_path, &config, force)?;
    config::ensure_db_dir(database)?;
    SqliteStore::open(database)?;

    if output_mode.is_human() {
        ui::success(&format!("Initialized {}", database.display()));
        ui::field(Icons::INFO, "Config", &config_path.display().to_string());
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": database.display().to_string(),
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_list(output_mode: OutputMode, service: &RelationshipService, sort: &str) -> anyhow::Result<()> {
    let listing = service.list_entries(sort)?;

    if output_mode.is_human() {
        for notice in &listing.notices {
            ui::notice(notice);
        }
        if listing.entries.is_empty() {
            ui::empty("No monkies here so far");
        } else {
            ui::header(&format!("{} monkeys, sorted by {}", listing.entries.len(), listing.sort.order_by()));
            println!("{}", ui::entries_table(&listing.entries));
        }
    } else {
        emit_success(output_mode, "list", &listing)?;
    }
    Ok(())
}

/// Show a profile; an unknown mail warns and falls back to the listing
pub fn run_show(output_mode: OutputMode, service: &RelationshipService, mail: &str) -> anyhow::Result<()> {
    match service.view_profile(mail) {
        Ok(profile) => {
            if output_mode.is_human() {
                render_profile(&profile);
            } else {
                emit_success(output_mode, "show", &profile)?;
            }
            Ok(())
        }
        Err(err) if err.is_notice() => {
            if output_mode.is_human() {
                ui::warn("Profile not found");
                run_list(output_mode, service, "id")
            } else {
                println!("{}", error_envelope("show", &err.to_string())?);
                Ok(())
            }
        }
        Err(err) => Err(err.into()),
    }
}

pub fn run_add(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    fields: &EntryFields,
) -> anyhow::Result<()> {
    let id = service.add_entry(access, fields)?;
    if output_mode.is_human() {
        ui::success("New monkey was successfully added");
        run_list(output_mode, service, "id")
    } else {
        emit_success(output_mode, "add", serde_json::json!({ "id": id, "mail": fields.mail }))
    }
}

pub fn run_edit(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    old_mail: &str,
    fields: &EntryFields,
) -> anyhow::Result<()> {
    service.edit_entry(access, old_mail, fields)?;
    if output_mode.is_human() {
        ui::success("Monkey was successfully edited");
        run_list(output_mode, service, "id")
    } else {
        emit_success(output_mode, "edit", serde_json::json!({ "old_mail": old_mail, "mail": fields.mail }))
    }
}

pub fn run_delete(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    mail: &str,
) -> anyhow::Result<()> {
    service.delete_entry(access, mail)?;
    if output_mode.is_human() {
        ui::success("Monkey was successfully removed from the database.");
        run_list(output_mode, service, "id")
    } else {
        emit_success(output_mode, "delete", serde_json::json!({ "mail": mail }))
    }
}

pub fn run_befriend(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    mail1: &str,
    mail2: &str,
) -> anyhow::Result<()> {
    service.add_friendship(access, mail1, mail2)?;
    if output_mode.is_human() {
        ui::success("Friendship added.");
        run_show(output_mode, service, mail2)
    } else {
        emit_success(output_mode, "befriend", serde_json::json!({ "mail1": mail1, "mail2": mail2 }))
    }
}

pub fn run_unfriend(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    mail1: &str,
    mail2: &str,
) -> anyhow::Result<()> {
    let removed = service.remove_friendship(access, mail1, mail2)?;
    if output_mode.is_human() {
        ui::success("Friendship removed.");
        run_show(output_mode, service, mail2)
    } else {
        emit_success(
            output_mode,
            "unfriend",
            serde_json::json!({ "mail1": mail1, "mail2": mail2, "removed": removed }),
        )
    }
}

pub fn run_best(
    output_mode: OutputMode,
    service: &RelationshipService,
    access: Access,
    mail: &str,
    best: Option<&str>,
) -> anyhow::Result<()> {
    service.set_best_friend(access, mail, best)?;
    if output_mode.is_human() {
        ui::success("Best friend set for the monkey.");
        run_show(output_mode, service, mail)
    } else {
        emit_success(output_mode, "best", serde_json::json!({ "mail": mail, "best": best }))
    }
}

pub fn run_stats(output_mode: OutputMode, service: &RelationshipService, database: &Path) -> anyhow::Result<()> {
    let stats = service.stats()?;
    if output_mode.is_human() {
        ui::field(Icons::DATABASE, "Database", &database.display().to_string());
        println!("{}", ui::stats_table(&stats));
    } else {
        emit_success(output_mode, "stats", &stats)?;
    }
    Ok(())
}

fn render_profile(profile: &Profile) {
    let entry = &profile.entry;
    ui::header(&format!("{} ({})", entry.name, entry.mail));
    ui::detail("Age", entry.age);
    ui::detail("Friends", profile.friends.len());
    if !entry.text.is_empty() {
        ui::detail("About", &entry.text);
    }

    ui::section("Friends", profile.friends.len());
    if !profile.has_friends() {
        ui::empty(&format!("{} has no friends.", entry.name));
    }
    for friend in &profile.friends {
        if entry.is_best(&friend.mail) {
            ui::member(Icons::STAR, friend, true);
        } else {
            ui::member(Icons::PERSON, friend, false);
        }
    }

    if let Some(best) = entry.best.as_deref() {
        if profile.best_friend().is_none() {
            ui::warn(&format!("Best friend {} is not a friend", best));
        }
    }

    ui::section("Others", profile.non_friends.len());
    for other in &profile.non_friends {
        ui::member(Icons::LINK, other, false);
    }
}

/// Human-facing description of a library error
pub fn describe(err: &Error) -> String {
    match err {
        Error::Unauthorized => format!("{} Login required: pass --user and --password", Icons::LOCK),
        Error::ConstraintViolation(mail) => format!("A monkey with mail {} already exists", mail),
        other => other.to_string(),
    }
}
