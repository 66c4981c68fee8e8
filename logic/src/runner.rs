use crate::adapter::{Adapter, AdapterBox};
use crate::help::print_help;
use crate::report::render_build_info;
use crate::version::{BUILDINFO_NAME, VersionStore};
use buildinfo_base::logging::{debug, info};
use buildinfo_base::result::{BuildInfoError, BuildInfoResult, Context};
use std::path::Path;
use std::rc::Rc;

pub struct BuildInfoRunner {
    adapter: AdapterBox,
    store: VersionStore,
}

impl BuildInfoRunner {
    pub fn new(adapter: impl Adapter) -> Self {
        let store = VersionStore::initialize(&adapter, &adapter);
        Self::with_store(adapter, store)
    }

    /// Runs against an already composed version instead of querying the adapter.
    pub fn with_store(adapter: impl Adapter, store: VersionStore) -> Self {
        Self {
            adapter: Rc::new(adapter),
            store,
        }
    }

    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    pub fn run(&self) {
        info!("Running {BUILDINFO_NAME} ({})", self.store.display_version());
        match self.run_inner() {
            Ok(()) => {}
            Err(err) => {
                self.print_error(err);
                self.adapter.exit(1);
            }
        }
    }

    pub fn run_inner(&self) -> BuildInfoResult<()> {
        let args = self.adapter.args();
        let first_arg = args.get(1).map(String::as_str).unwrap_or("--version");
        debug!("Handling argument '{first_arg}'");
        match first_arg {
            "--version" | "-V" => {
                self.print_version();
            }
            "--build-info" => match args.get(2) {
                Some(path) => self.write_build_info(Path::new(path))?,
                None => self.print_build_info(),
            },
            "--help" | "-h" => {
                print_help(self.adapter.as_ref(), &self.store);
            }
            other => {
                self.adapter.print(&format!("ERROR: Unknown argument: '{other}'\n\nTry --help for more information about supported arguments"));
                self.adapter.exit(1);
            }
        }
        Ok(())
    }

    fn print_error(&self, err: BuildInfoError) {
        let mut message = format!(
            "ERROR running {BUILDINFO_NAME} ({}): {err}\n",
            self.store.display_version()
        );
        if err.source().is_some() {
            message.push_str("  Chain of causes:\n");
            err.chain().skip(1).enumerate().for_each(|(index, err)| {
                message.push_str(&format!("   {index}: {err}\n"));
            });
        }
        self.adapter.print(&message);
    }

    fn print_version(&self) {
        self.adapter.print(&format!(
            "{BUILDINFO_NAME} {}",
            self.store.display_version()
        ));
    }

    fn print_build_info(&self) {
        self.adapter.print(render_build_info(&self.store).trim_end());
    }

    fn write_build_info(&self, path: &Path) -> BuildInfoResult<()> {
        self.adapter
            .write_file(path, &render_build_info(&self.store))
            .with_context(|| format!("Failed to write build information to '{}'", path.display()))
    }
}
