mod threaded;
