//! `meta-data` — print the OCF resource agent description.
//!
//! The cluster manager reads this document to learn the agent's parameters
//! and the default timeouts of each action. It must not depend on any
//! runtime state.

use crate::domain::OcfStatus;

/// Agent name as registered with the cluster manager.
pub const AGENT_NAME: &str = "ZFS";

/// Build the resource-agent XML document.
#[must_use]
pub fn document() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"<?xml version="1.0"?>
<!DOCTYPE resource-agent SYSTEM "ra-api-1.dtd">
<resource-agent name="{AGENT_NAME}" version="{version}">
<version>1.0</version>

<longdesc lang="en">
Imports a ZFS pool on start and exports it on stop. The pool is imported
with cachefile=none so that only the cluster manager decides where it is
brought up after a reboot. Before export, every process holding files open
on one of the pool's mountpoints is killed with fuser.
</longdesc>
<shortdesc lang="en">Manages ZFS pools</shortdesc>

<parameters>
<parameter name="pool" unique="1" required="1">
<longdesc lang="en">
Name of the ZFS pool to manage, e.g. "tank".
</longdesc>
<shortdesc lang="en">ZFS pool name</shortdesc>
<content type="string" default="" />
</parameter>

<parameter name="importargs" unique="0" required="0">
<longdesc lang="en">
Extra arguments for zpool import, e.g. "-d /dev/disk/by-id".
</longdesc>
<shortdesc lang="en">Import arguments</shortdesc>
<content type="string" default="" />
</parameter>

<parameter name="exportargs" unique="0" required="0">
<longdesc lang="en">
Extra arguments for zpool export.
</longdesc>
<shortdesc lang="en">Export arguments</shortdesc>
<content type="string" default="" />
</parameter>

<parameter name="importforce" unique="0" required="0">
<longdesc lang="en">
Import with -f, even if the pool appears to be in use by another system.
Needed to take over a pool from a node that failed without exporting it.
</longdesc>
<shortdesc lang="en">Force import</shortdesc>
<content type="boolean" default="false" />
</parameter>

<parameter name="debug" unique="0" required="0">
<longdesc lang="en">
Write debug logs to standard error, tagged with the pool name.
</longdesc>
<shortdesc lang="en">Debug logging</shortdesc>
<content type="boolean" default="false" />
</parameter>
</parameters>

<actions>
<action name="start" timeout="60s" />
<action name="stop" timeout="60s" />
<action name="monitor" depth="0" timeout="30s" interval="5s" />
<action name="validate-all" timeout="30s" />
<action name="meta-data" timeout="5s" />
</actions>
</resource-agent>"#
    )
}

/// Run `meta-data`.
pub fn run() -> OcfStatus {
    println!("{}", document());
    OcfStatus::Success
}
