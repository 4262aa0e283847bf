use crate::domain::tools::Tool;

use super::step_stats::StepStats;
use super::WorldCore;

pub(super) fn select_tool(world: &mut WorldCore, tool: Tool) {
    world.selected_tool = tool;
}

pub(super) fn selected_tool(world: &WorldCore) -> Tool {
    world.selected_tool
}

pub(super) fn get_step_stats(world: &WorldCore) -> StepStats {
    world.step_stats.clone()
}
