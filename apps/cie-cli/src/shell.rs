//! Interactive session: one command per line on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use cie_app::{AppResult, EMPTY_LIST_TEXT, Notice, PointInput, Session};
use cie_core::PointId;
use cie_diagram::DiagramKind;

const HELP: &str = "\
Commands:
  add NAME H V     add a point (NAME may contain spaces)
  list             list points
  delete ID        delete a point by id
  clear            delete all points
  toggle           switch between the 1976 u'v' and 1931 xy diagrams
  diagram [KIND]   show or select the diagram (1976uv, 1931xy)
  plot             show pixel and marker positions
  export [PATH]    write points as JSON
  import PATH      replace points with a JSON file
  help             show this help
  quit             leave the session";

#[derive(Debug, PartialEq)]
enum ShellCommand {
    Add {
        name: String,
        horiz: String,
        vert: String,
    },
    List,
    Delete(String),
    Clear,
    Toggle,
    Diagram(Option<String>),
    Plot,
    Export(Option<PathBuf>),
    Import(PathBuf),
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (head, rest) {
        ("add", args) if args.len() >= 3 => {
            let (name, coords) = args.split_at(args.len() - 2);
            ShellCommand::Add {
                name: name.join(" "),
                horiz: coords[0].to_string(),
                vert: coords[1].to_string(),
            }
        }
        ("add", _) => return Err("usage: add NAME H V".to_string()),
        ("list" | "ls", []) => ShellCommand::List,
        ("delete" | "rm", [id]) => ShellCommand::Delete(id.to_string()),
        ("delete" | "rm", _) => return Err("usage: delete ID".to_string()),
        ("clear", []) => ShellCommand::Clear,
        ("toggle", []) => ShellCommand::Toggle,
        ("diagram", []) => ShellCommand::Diagram(None),
        ("diagram", [kind]) => ShellCommand::Diagram(Some(kind.to_string())),
        ("plot", []) => ShellCommand::Plot,
        ("export", []) => ShellCommand::Export(None),
        ("export", [path]) => ShellCommand::Export(Some(PathBuf::from(*path))),
        ("import", [path]) => ShellCommand::Import(PathBuf::from(*path)),
        ("import", _) => return Err("usage: import PATH".to_string()),
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        (other, _) => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

pub fn run(mut session: Session) -> AppResult<()> {
    println!(
        "CIE Visual ({}) - type 'help' for commands",
        session.spec().title_suffix
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("[{}]> ", session.diagram());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(&mut session, command),
            Err(message) => println!("{}", message),
        }
    }
    Ok(())
}

fn execute(session: &mut Session, command: ShellCommand) {
    match command {
        ShellCommand::Add { name, horiz, vert } => {
            match PointInput::parse(&name, &horiz, &vert, session.spec()) {
                Ok(input) => println!("{}", session.add_point(input)),
                Err(err) => println!("{}", Notice::failure("Point not added", &err)),
            }
        }
        ShellCommand::List => print_list(session),
        ShellCommand::Delete(raw) => match raw.parse::<PointId>() {
            Ok(id) => match session.delete_point(&id) {
                Some(notice) => println!("{}", notice),
                None => println!("No point with id {}", id),
            },
            Err(err) => println!("{}", err),
        },
        ShellCommand::Clear => println!("{}", session.clear_points()),
        ShellCommand::Toggle => {
            session.toggle_diagram();
            println!("Switched to CIE {}", session.spec().title_suffix);
        }
        ShellCommand::Diagram(None) => println!("{}", describe(session.diagram())),
        ShellCommand::Diagram(Some(raw)) => match raw.parse::<DiagramKind>() {
            Ok(kind) => {
                session.set_diagram(kind);
                println!("Switched to CIE {}", session.spec().title_suffix);
            }
            Err(err) => println!("{}", err),
        },
        ShellCommand::Plot => print_plot(session),
        ShellCommand::Export(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&session.config().export_file_name));
            match session.export_to_file(&path) {
                Ok(notice) => println!("{}", notice),
                Err(err) => println!("{}", Notice::failure("Export failed", &err)),
            }
        }
        ShellCommand::Import(path) => match session.import_from_file(&path) {
            Ok(notice) => println!("{}", notice),
            Err(err) => println!("{}", Notice::failure("Import failed", &err)),
        },
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
}

fn describe(kind: DiagramKind) -> String {
    let spec = kind.spec();
    format!(
        "{} - CIE {} (fields: name, {}, {}; e.g. {} {})",
        kind,
        spec.title_suffix,
        spec.json_fields.horiz,
        spec.json_fields.vert,
        spec.placeholders.horiz,
        spec.placeholders.vert
    )
}

fn print_list(session: &Session) {
    let rows = session.list_rows();
    if rows.is_empty() {
        println!("{}", EMPTY_LIST_TEXT);
        return;
    }
    println!("Marked points ({}):", rows.len());
    for row in rows {
        println!("  {}  {}  ({})", row.id, row.name, row.coordinates);
    }
}

pub fn print_plot(session: &Session) {
    let plotted = session.plot();
    if plotted.is_empty() {
        println!("{}", EMPTY_LIST_TEXT);
        return;
    }
    let spec = session.spec();
    println!(
        "{} on {} ({}x{} px):",
        plotted.len(),
        spec.image_path,
        spec.image_width_px,
        spec.image_height_px
    );
    for p in plotted {
        println!("  {}", p.label);
        println!(
            "    pixel ({:.2}, {:.2})  marker ({:.2}, {:.2})",
            p.pixel.x, p.pixel.y, p.marker.x, p.marker.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_spaces_in_name() {
        let command = parse_line("add Illuminant A 0.2560 0.5243\n").unwrap();
        assert_eq!(
            command,
            Some(ShellCommand::Add {
                name: "Illuminant A".to_string(),
                horiz: "0.2560".to_string(),
                vert: "0.5243".to_string(),
            })
        );
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_line("   \n").unwrap(), None);
    }

    #[test]
    fn bad_arity_is_usage_error() {
        assert!(parse_line("add D65 0.3").is_err());
        assert!(parse_line("delete").is_err());
        assert!(parse_line("import").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn export_path_is_optional() {
        assert_eq!(parse_line("export").unwrap(), Some(ShellCommand::Export(None)));
        assert_eq!(
            parse_line("export out.json").unwrap(),
            Some(ShellCommand::Export(Some(PathBuf::from("out.json"))))
        );
    }

    #[test]
    fn execute_adds_and_clears() {
        let mut session = Session::default();
        execute(
            &mut session,
            ShellCommand::Add {
                name: "D65".to_string(),
                horiz: "0.3127".to_string(),
                vert: "0.3290".to_string(),
            },
        );
        assert_eq!(session.store().len(), 1);
        execute(
            &mut session,
            ShellCommand::Add {
                name: "bad".to_string(),
                horiz: "x".to_string(),
                vert: "0.3".to_string(),
            },
        );
        assert_eq!(session.store().len(), 1);
        execute(&mut session, ShellCommand::Clear);
        assert!(session.store().is_empty());
    }
}
