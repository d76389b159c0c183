//! Generated helper files: environment script, restart script and readme.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const ENV_SCRIPT: &str = "settings.sh";
pub const RESTART_SCRIPT: &str = "restart.sh";
pub const README: &str = "README.txt";

/// Script under the service directory that controls the ANNIS service.
pub const SERVICE_SCRIPT: &str = "bin/annis-service-no-security.sh";

pub fn env_script(annis_home: &Path) -> String {
    format!(
        "export ANNIS_HOME={}\nexport PATH=$PATH:$ANNIS_HOME/bin\n",
        annis_home.display()
    )
}

pub fn restart_script(annis_home: &Path, search_dir: &Path) -> String {
    format!(
        "#!/bin/sh\n\n{}/{SERVICE_SCRIPT} restart\ncd {}\nbundle exec rake jetty:stop jetty:start\n",
        annis_home.display(),
        search_dir.display()
    )
}

pub fn readme(login: &str, gui_war: &Path) -> String {
    let mut text = String::new();
    text.push_str("Restarting\n\n");
    text.push_str(&format!(
        "The file {RESTART_SCRIPT} can be used to restart the necessary services, for example\n"
    ));
    text.push_str("in the case of a reboot. If you want this to be automatic, you should ensure\n");
    text.push_str("the script is run at startup time e.g. via /etc/init.d/. It should be executed\n");
    text.push_str(&format!("with the privileges of the current user ({login}).\n"));
    text.push_str("\n\n");
    text.push_str("Deploying ANNIS GUI\n\n");
    text.push_str("Move the generated WAR file to the webapps directory of your servlet container.\n");
    text.push_str("For example, for a typical installation of Tomcat 7:\n");
    text.push_str(&format!(
        "sudo cp {} /var/lib/tomcat7/webapps/annis.war\n",
        gui_war.display()
    ));
    text
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// Write a shell script and mark it executable where that applies.
pub fn write_script(path: &Path, contents: &str) -> Result<()> {
    write_text(path, contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("make {} executable", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_script_exports_home_and_path() {
        let text = env_script(Path::new("/srv/orfeo/annis-service-3.2.1"));
        assert_eq!(
            text,
            "export ANNIS_HOME=/srv/orfeo/annis-service-3.2.1\nexport PATH=$PATH:$ANNIS_HOME/bin\n"
        );
    }

    #[test]
    fn restart_script_restarts_service_and_jetty() {
        let text = restart_script(
            Path::new("/srv/orfeo/annis-service-3.2.1"),
            Path::new("/srv/orfeo/orfeo-search"),
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(
            lines[2],
            "/srv/orfeo/annis-service-3.2.1/bin/annis-service-no-security.sh restart"
        );
        assert_eq!(lines[3], "cd /srv/orfeo/orfeo-search");
        assert_eq!(lines[4], "bundle exec rake jetty:stop jetty:start");
    }

    #[test]
    fn readme_names_user_and_war() {
        let text = readme("annis", Path::new("/srv/orfeo/ANNIS/annis-gui/target/annis-gui.war"));
        assert!(text.contains("privileges of the current user (annis)"));
        assert!(text.contains(
            "sudo cp /srv/orfeo/ANNIS/annis-gui/target/annis-gui.war /var/lib/tomcat7/webapps/annis.war"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(RESTART_SCRIPT);
        write_script(&path, "#!/bin/sh\n").expect("write");
        let mode = fs::metadata(&path).expect("meta").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
