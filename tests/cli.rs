//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;

    use assert_cmd::Command;

    #[test]
    fn rewrites_a_document_and_prints_a_summary() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("index.html");
        fs::write(dir.path().join("pic.jpg"), b"pixels").unwrap();
        fs::write(&document, "<html><body><img src=\"pic.jpg\"></body></html>").unwrap();

        let output = Command::cargo_bin("revstatic")
            .unwrap()
            .arg("--root")
            .arg(dir.path())
            .arg(&document)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("1 document(s) rewritten"));

        let rewritten = fs::read_to_string(&document).unwrap();
        assert!(!rewritten.contains("src=\"pic.jpg\""));
        assert!(rewritten.contains("src=\"pic."));
    }

    #[test]
    fn silent_suppresses_the_summary() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("index.html");
        fs::write(&document, "<html><body></body></html>").unwrap();

        let output = Command::cargo_bin("revstatic")
            .unwrap()
            .arg("--silent")
            .arg("--root")
            .arg(dir.path())
            .arg(&document)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn dry_run_leaves_the_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("index.html");
        fs::write(dir.path().join("pic.jpg"), b"pixels").unwrap();
        let original = "<html><body><img src=\"pic.jpg\"></body></html>";
        fs::write(&document, original).unwrap();

        Command::cargo_bin("revstatic")
            .unwrap()
            .arg("--dry-run")
            .arg("--root")
            .arg(dir.path())
            .arg(&document)
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&document).unwrap(), original);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use assert_cmd::Command;

    #[test]
    fn no_arguments_is_a_usage_error() {
        Command::cargo_bin("revstatic").unwrap().assert().failure();
    }

    #[test]
    fn an_unreadable_document_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();

        let output = Command::cargo_bin("revstatic")
            .unwrap()
            .arg("--root")
            .arg(dir.path())
            .arg(dir.path().join("ghost.html"))
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("unable to read"));
    }
}
