mod feedback;
mod volunteer;
