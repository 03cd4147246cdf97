use std::fs;
use std::process::Command;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cli(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_website-scraper"));
    command.current_dir(dir.path());
    command
}

#[test]
fn cli_prints_version() {
    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir).arg("--version").output().expect("run CLI");

    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("website-scraper version {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn cli_version_ignores_url() {
    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir)
        .args(["-V", "https://example.com"])
        .output()
        .expect("run CLI");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("website-scraper version "));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_requires_url() {
    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir).output().expect("run CLI");

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_rejects_invalid_url() {
    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir).arg("ftp://example.com/").output().expect("run CLI");

    assert!(!output.status.success());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_scrapes_single_page() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    "<nav><a href='/a'>A</a><a href='/b'>B</a><a href='/c'>C</a></nav><h1>Hi</h1>",
                    "text/html",
                ),
            )
            .mount(&server)
            .await;
        server
    });

    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir)
        .args([server.uri().as_str(), "--skip-links", "--quiet"])
        .output()
        .expect("run CLI");

    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scraped 1 pages to directory: "), "{}", stdout);

    let site_dir = fs::read_dir(dir.path())
        .unwrap()
        .next()
        .expect("site directory")
        .unwrap()
        .path();
    assert_eq!(fs::read_to_string(site_dir.join("index.txt")).unwrap(), "# Hi\n");
    assert_eq!(fs::read_dir(&site_dir).unwrap().count(), 1);
}

#[test]
fn cli_max_depth_zero_stays_on_start_page() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<nav><a href='/a'>A</a></nav><p>Start</p>",
                "text/html",
            ))
            .mount(&server)
            .await;
        server
    });

    let dir = TempDir::new().expect("temp dir");
    let output = cli(&dir)
        .args([server.uri().as_str(), "--max-depth", "0", "-q"])
        .output()
        .expect("run CLI");

    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Scraped 1 pages"));
}
