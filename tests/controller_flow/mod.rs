mod markers;
mod routing;
mod startup;
