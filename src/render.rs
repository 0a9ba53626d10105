use std::path::Path;

use crate::answers::Answers;
use crate::error::GrogError;

/// Build the Vagrantfile from the sealed answers.
///
/// The Landrush block is emitted commented out; the completion banner
/// tells the user to uncomment it after the first provisioning run.
pub fn generate_vagrantfile(answers: &Answers) -> String {
    let mut out = String::new();

    out.push_str("# -*- mode: ruby -*-\n");
    out.push_str("# vi: set ft=ruby :\n");
    out.push('\n');
    out.push_str("Vagrant.configure(\"2\") do |config|\n");

    match (&answers.new_box_name, &answers.new_box_url) {
        (Some(name), Some(url)) => {
            out.push_str(&format!("  config.vm.box = \"{name}\"\n"));
            out.push_str(&format!("  config.vm.box_url = \"{url}\"\n"));
        }
        _ => {
            out.push_str(&format!("  config.vm.box = \"{}\"\n", answers.box_name));
        }
    }

    out.push_str(&format!(
        "  config.vm.hostname = \"{}\"\n",
        answers.host_name
    ));
    out.push_str(&format!(
        "  config.vm.network \"forwarded_port\", guest: {port}, host: {port}\n",
        port = answers.host_port
    ));
    out.push('\n');

    // [Landrush] Uncomment after the first `vagrant up`, then re-run
    // with --provision to register the guest in Landrush DNS.
    out.push_str("  # config.landrush.enabled = true\n");
    out.push_str(&format!(
        "  # config.landrush.host \"{}\"\n",
        answers.host_name
    ));
    out.push('\n');

    out.push_str("  config.vm.provision \"chef_client\" do |chef|\n");
    out.push_str(&format!(
        "    chef.chef_server_url = \"{}\"\n",
        answers.server_url
    ));
    out.push_str(&format!(
        "    chef.validation_client_name = \"{}\"\n",
        answers.validation_client_name
    ));
    out.push_str(&format!(
        "    chef.validation_key_path = \"{}\"\n",
        answers.validation_key_path
    ));
    if !answers.knife_environment.is_empty() {
        out.push_str(&format!(
            "    chef.environment = \"{}\"\n",
            answers.knife_environment
        ));
    }
    for role in &answers.knife_roles {
        out.push_str(&format!("    chef.add_role \"{role}\"\n"));
    }
    out.push_str("  end\n");
    out.push_str("end\n");

    out
}

/// Write the generated Vagrantfile. This is the run's single effectful
/// output and happens exactly once, after the questionnaire completes.
pub fn write_vagrantfile(answers: &Answers, path: &Path) -> Result<(), GrogError> {
    let contents = generate_vagrantfile(answers);
    std::fs::write(path, &contents).map_err(|e| GrogError::OutputWrite {
        path: path.display().to_string(),
        source: e,
    })
}

// ── tests ────────────────────────────────────────────────
